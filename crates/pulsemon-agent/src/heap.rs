//! jemalloc heap statistics.
//!
//! The agent binary installs `tikv_jemallocator::Jemalloc` as its global
//! allocator; these readings describe that heap. Every read advances the
//! jemalloc stats epoch first so the values are current. On targets without
//! jemalloc (MSVC) every field reads zero.

/// Point-in-time copy of the allocator's counters, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapStats {
    /// Bytes handed out to the program.
    pub allocated: u64,
    /// Bytes in active pages (allocated plus page-level fragmentation).
    pub active: u64,
    /// Bytes in physically resident allocator pages.
    pub resident: u64,
    /// Bytes in active extents mapped by the allocator.
    pub mapped: u64,
    /// Bytes retained as virtual mappings after their pages were purged.
    pub retained: u64,
}

impl HeapStats {
    #[cfg(not(target_env = "msvc"))]
    pub fn read() -> Self {
        match Self::try_read() {
            Ok(stats) => stats,
            Err(e) => {
                tracing::debug!(error = %e, "jemalloc stats unavailable");
                Self::default()
            }
        }
    }

    #[cfg(target_env = "msvc")]
    pub fn read() -> Self {
        Self::default()
    }

    #[cfg(not(target_env = "msvc"))]
    fn try_read() -> Result<Self, tikv_jemalloc_ctl::Error> {
        use tikv_jemalloc_ctl::{epoch, stats};

        epoch::advance()?;
        Ok(Self {
            allocated: stats::allocated::read()? as u64,
            active: stats::active::read()? as u64,
            resident: stats::resident::read()? as u64,
            mapped: stats::mapped::read()? as u64,
            retained: stats::retained::read()? as u64,
        })
    }

    /// Mapped bytes not backing live pages.
    pub fn idle(&self) -> u64 {
        self.mapped.saturating_sub(self.active)
    }

    /// Virtual memory obtained from the OS: mapped plus retained.
    pub fn sys(&self) -> u64 {
        self.mapped.saturating_add(self.retained)
    }
}
