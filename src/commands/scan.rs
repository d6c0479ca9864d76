use crate::cli::ScanArgs;
use crate::nbscan::{
    families::Family,
    hotspots::HotspotParams,
    record::{stream_records_into_channel, SeqRecord},
    sequence::Sequence,
    workflows::{self, analyze_sequence, AnalysisResult, Params},
    writers::{HotspotWriter, MotifWriter},
};
use crate::utils::{create_writer, Result, ScanError};
use crossbeam_channel::{bounded, Receiver, Sender};
use rayon::{
    iter::{ParallelBridge, ParallelIterator},
    ThreadPoolBuilder,
};
use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
};

const CHANNEL_BUFFER_SIZE: usize = 2048;

/// Analysis outcome of one input record; `result` is `None` when the record
/// was rejected or the run was cancelled
struct RecordOutcome {
    index: usize,
    id: String,
    result: Option<AnalysisResult>,
}

pub fn scan(args: ScanArgs) -> Result<()> {
    let motif_writer = create_writer(&args.output_prefix, "motifs.tsv", MotifWriter::new)?;
    let hotspot_writer = if !args.no_hotspots {
        Some(create_writer(
            &args.output_prefix,
            "hotspots.tsv",
            HotspotWriter::new,
        )?)
    } else {
        None
    };

    let cancel = Arc::new(AtomicBool::new(false));

    let (sender_record, receiver_record) = bounded(CHANNEL_BUFFER_SIZE);
    let input_path = args.input_path.clone();
    let record_stream_thread =
        thread::spawn(move || stream_records_into_channel(&input_path, sender_record));

    let (sender_result, receiver_result) = bounded(CHANNEL_BUFFER_SIZE);
    let writer_cancel = Arc::clone(&cancel);
    let writer_thread = thread::spawn(move || {
        let written = write_in_input_order(receiver_result, motif_writer, hotspot_writer);
        if written.is_err() {
            writer_cancel.store(true, Ordering::Relaxed);
        }
        written
    });

    let workflow_params = Arc::new(params_from_args(&args));

    log::debug!(
        "Initializing thread pool with {} threads...",
        args.num_threads
    );
    let pool = initialize_thread_pool(args.num_threads)?;
    pool.install(|| {
        receiver_record
            .into_iter()
            .par_bridge()
            .for_each_with(&sender_result, |s, record_result| match record_result {
                Ok(record) => process_record(record, &workflow_params, &cancel, s),
                Err(err) => log::error!("Record processing: {:#}", err),
            });
    });

    // Clean-up
    drop(sender_result);
    let written = writer_thread
        .join()
        .map_err(|_| "Writer thread panicked".to_string())??;
    log::trace!("Writer thread finished");
    match record_stream_thread
        .join()
        .map_err(|_| "Record stream thread panicked".to_string())?
    {
        Ok(_) => log::trace!("Record stream thread finished"),
        Err(e) => log::error!("Record streaming failed: {}", e),
    }

    log::info!("Wrote results for {} records", written);
    Ok(())
}

fn params_from_args(args: &ScanArgs) -> Params {
    let families = if args.families.is_empty() {
        Family::ALL.to_vec()
    } else {
        args.families.clone()
    };
    let hotspots = (!args.no_hotspots).then_some(HotspotParams {
        window: args.hotspot_window,
        min_count: args.hotspot_min_count,
    });
    workflows::Params {
        families,
        scan_mode: args.scan_mode,
        resolution: args.resolution,
        hybrid_max_distance: args.hybrid_distance,
        hotspots,
        hotspot_source: args.hotspot_source,
        max_palindrome_len: args.max_palindrome_len,
    }
}

fn process_record(
    record: SeqRecord,
    workflow_params: &Arc<Params>,
    cancel: &AtomicBool,
    sender_result: &Sender<RecordOutcome>,
) {
    let SeqRecord { index, id, bases } = record;
    let result = if cancel.load(Ordering::Relaxed) {
        None
    } else {
        match Sequence::new(bases).and_then(|seq| analyze_sequence(&seq, workflow_params, cancel)) {
            Ok(result) => {
                log::info!(
                    "{}: {} candidates, {} motifs, {} hotspots",
                    id,
                    result.candidates.len(),
                    result.motifs.len(),
                    result.hotspots.len()
                );
                Some(result)
            }
            Err(ScanError::Cancelled) => None,
            Err(err) => {
                log::warn!("Skipping record {}: {}", id, err);
                None
            }
        }
    };

    if let Err(e) = sender_result.send(RecordOutcome { index, id, result }) {
        log::error!("Failed to send record result to writer thread: {}", e);
    }
}

/// Writes outcomes as they arrive, holding back any that overtook an
/// earlier record. Returns the number of records written.
fn write_in_input_order(
    receiver: Receiver<RecordOutcome>,
    mut motif_writer: MotifWriter,
    mut hotspot_writer: Option<HotspotWriter>,
) -> Result<usize> {
    let mut write = |outcome: &RecordOutcome| -> Result<bool> {
        let Some(result) = &outcome.result else {
            return Ok(false);
        };
        motif_writer.write(&outcome.id, &result.motifs)?;
        if let Some(writer) = hotspot_writer.as_mut() {
            writer.write(&outcome.id, &result.hotspots)?;
        }
        Ok(true)
    };

    let mut pending: BTreeMap<usize, RecordOutcome> = BTreeMap::new();
    let mut next_index = 0;
    let mut written = 0;
    for outcome in &receiver {
        pending.insert(outcome.index, outcome);
        while let Some(outcome) = pending.remove(&next_index) {
            written += usize::from(write(&outcome)?);
            next_index += 1;
        }
    }
    for outcome in pending.values() {
        written += usize::from(write(outcome)?);
    }

    motif_writer.finish()?;
    if let Some(writer) = hotspot_writer {
        writer.finish()?;
    }
    Ok(written)
}

fn initialize_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("nbscan-{}", i))
        .start_handler(|_thread_index| {
            log::trace!("Initialized thread {:?}", std::thread::current().id());
        })
        .build()
        .map_err(|e| format!("Failed to initialize thread pool: {}", e))
}
