//! Simulates one engine startup frame: asset loads and command-buffer
//! recording fan out to the worker pool, then the "main thread" rendezvous
//! with each type before moving on.
//!
//! Run with: RUST_LOG=debug cargo run --example engine_frame

use job_system::prelude::*;
use std::thread;
use std::time::Duration;

fn main() -> job_system::Result<()> {
    env_logger::init();

    let mut jobs = JobSystem::new();
    jobs.register_job_type(EngineJobType::LoadAsset);
    jobs.register_job_type(EngineJobType::GenerateCommandBuffer);
    jobs.init()?;

    println!("worker pool: {} threads", jobs.worker_count());

    for i in 0..8 {
        jobs.execute(EngineJobType::LoadAsset, move || {
            // Stand-in for parsing a model file off the main thread.
            thread::sleep(Duration::from_millis(20 + (i % 4) * 10));
            println!("loaded asset {}", i);
        })?;
    }

    for i in 0..4 {
        jobs.execute(EngineJobType::GenerateCommandBuffer, move || {
            thread::sleep(Duration::from_millis(10));
            println!("recorded command buffer {}", i);
        })?;
    }

    jobs.wait(EngineJobType::GenerateCommandBuffer)?;
    println!("command buffers ready, assets still pending: {}",
        jobs.pending(EngineJobType::LoadAsset)?);

    jobs.wait(EngineJobType::LoadAsset)?;
    println!("all assets resident; {} jobs ran this frame", jobs.total_jobs_submitted());

    Ok(())
}
