//! Process runtime statistics sampler.
//!
//! Produces the fixed gauge set listed in `RUNTIME_GAUGES`, in that order.
//! Heap gauges keep the Go runtime names (`HeapAlloc`, `HeapInuse`, ...) so
//! existing readers keep working; they are read from jemalloc. Missing
//! process information reads as zero rather than failing the tick.

use std::sync::{Mutex, PoisonError};

use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::heap::HeapStats;

/// Gauge names produced by every sample.
pub const RUNTIME_GAUGES: [&str; 20] = [
    "Alloc",
    "HeapAlloc",
    "HeapIdle",
    "HeapInuse",
    "HeapReleased",
    "HeapSys",
    "Sys",
    "ResidentMemory",
    "VirtualMemory",
    "CPUUsage",
    "DiskReadBytes",
    "DiskWrittenBytes",
    "Uptime",
    "TotalMemory",
    "UsedMemory",
    "FreeMemory",
    "AvailableMemory",
    "TotalSwap",
    "UsedSwap",
    "LoadAverage1",
];

#[derive(Debug)]
pub struct RuntimeSampler {
    system: Mutex<System>,
    pid: Option<Pid>,
}

impl RuntimeSampler {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!(error = %e, "current pid unavailable, process gauges will read 0");
                None
            }
        };
        Self {
            system: Mutex::new(System::new()),
            pid,
        }
    }

    /// Refresh and read every runtime gauge.
    pub fn sample(&self) -> Vec<(&'static str, f64)> {
        let mut system = self.system.lock().unwrap_or_else(PoisonError::into_inner);

        system.refresh_memory();
        if let Some(pid) = self.pid {
            system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        }
        let process = self.pid.and_then(|pid| system.process(pid));

        let heap = HeapStats::read();
        let (rss, vmem, cpu, read, written, uptime) = match process {
            Some(p) => {
                let disk = p.disk_usage();
                (
                    p.memory(),
                    p.virtual_memory(),
                    f64::from(p.cpu_usage()),
                    disk.total_read_bytes,
                    disk.total_written_bytes,
                    p.run_time(),
                )
            }
            None => (0, 0, 0.0, 0, 0, 0),
        };

        vec![
            ("Alloc", heap.allocated as f64),
            ("HeapAlloc", heap.allocated as f64),
            ("HeapIdle", heap.idle() as f64),
            ("HeapInuse", heap.active as f64),
            ("HeapReleased", heap.retained as f64),
            ("HeapSys", heap.mapped as f64),
            ("Sys", heap.sys() as f64),
            ("ResidentMemory", rss as f64),
            ("VirtualMemory", vmem as f64),
            ("CPUUsage", cpu),
            ("DiskReadBytes", read as f64),
            ("DiskWrittenBytes", written as f64),
            ("Uptime", uptime as f64),
            ("TotalMemory", system.total_memory() as f64),
            ("UsedMemory", system.used_memory() as f64),
            ("FreeMemory", system.free_memory() as f64),
            ("AvailableMemory", system.available_memory() as f64),
            ("TotalSwap", system.total_swap() as f64),
            ("UsedSwap", system.used_swap() as f64),
            ("LoadAverage1", System::load_average().one),
        ]
    }
}

impl Default for RuntimeSampler {
    fn default() -> Self {
        Self::new()
    }
}
