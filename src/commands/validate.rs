use crate::cli::ValidateArgs;
use crate::nbscan::{record::get_records, sequence::Sequence};
use crate::utils::{open_fasta_reader, Result};

pub fn validate(args: ValidateArgs) -> Result<()> {
    let reader = open_fasta_reader(&args.input_path)?;
    let mut error_count = 0;
    let mut success_count = 0;
    let mut seq_lengths = Vec::new();

    for result in get_records(reader) {
        let record = result?;
        match Sequence::new(record.bases) {
            Ok(seq) => {
                seq_lengths.push(seq.len());
                success_count += 1;
            }
            Err(e) => {
                log::error!("{}: {}", record.id, e);
                error_count += 1;
            }
        }
    }

    let total = success_count + error_count;
    if total == 0 {
        return Err(format!(
            "No FASTA records found in {}",
            args.input_path.display()
        ));
    }

    let length_stats = calculate_stats(&seq_lengths);
    log::info!(
        "Sequence Lengths - Range: [{},{}], Median: {:.2}, Mean: {:.2}, StdDev: {:.2}",
        length_stats.min,
        length_stats.max,
        length_stats.median,
        length_stats.mean,
        length_stats.std_dev
    );

    let success_percentage = (success_count as f64 / total as f64) * 100.0;
    let error_percentage = (error_count as f64 / total as f64) * 100.0;
    match error_count {
        0 => log::info!("Validation successful. Records pass={}", success_count),
        _ => log::info!(
            "Validation failed. Records pass={} ({:.2}%), fail={} ({:.2}%)",
            success_count,
            success_percentage,
            error_count,
            error_percentage
        ),
    }

    Ok(())
}

fn calculate_stats(data: &[usize]) -> Stats {
    if data.is_empty() {
        return Stats::default();
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    let len = sorted.len();
    let median = if len % 2 == 0 {
        (sorted[len / 2 - 1] + sorted[len / 2]) as f64 / 2.0
    } else {
        sorted[len / 2] as f64
    };
    let sum: usize = sorted.iter().sum();
    let mean = sum as f64 / len as f64;
    let std_dev = (sorted
        .iter()
        .map(|&x| (x as f64 - mean).powi(2))
        .sum::<f64>()
        / len as f64)
        .sqrt();
    Stats {
        min: sorted[0],
        max: sorted[len - 1],
        mean,
        median,
        std_dev,
    }
}

#[derive(Debug, Default, PartialEq)]
struct Stats {
    min: usize,
    max: usize,
    mean: f64,
    median: f64,
    std_dev: f64,
}
