// Mount/unmount bookkeeping. `mount()` is async (adapter and device requests
// yield to the browser), so an `unmount()` can arrive before the mount
// finishes; the gate remembers it and the finished mount is discarded.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MountPhase {
    #[default]
    Idle,
    Mounting {
        unmount_requested: bool,
    },
    Mounted,
}

/// What `unmount()` has to do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnmountAction {
    /// A mount is live; tear it down.
    Teardown,
    /// A mount is in flight; it will be torn down when it completes.
    Deferred,
    Nothing,
}

/// What to do with a mount whose setup just completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    Install,
    Discard,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountGate {
    phase: MountPhase,
}

impl MountGate {
    pub fn phase(&self) -> MountPhase {
        self.phase
    }

    /// Claim the gate for a new mount. Fails while one is active or in flight.
    pub fn begin(&mut self) -> bool {
        if self.phase != MountPhase::Idle {
            return false;
        }
        self.phase = MountPhase::Mounting {
            unmount_requested: false,
        };
        true
    }

    /// Setup finished successfully.
    pub fn complete(&mut self) -> MountOutcome {
        match self.phase {
            MountPhase::Mounting {
                unmount_requested: true,
            } => {
                self.phase = MountPhase::Idle;
                MountOutcome::Discard
            }
            _ => {
                self.phase = MountPhase::Mounted;
                MountOutcome::Install
            }
        }
    }

    /// Setup failed; the gate reopens.
    pub fn fail(&mut self) {
        self.phase = MountPhase::Idle;
    }

    pub fn request_unmount(&mut self) -> UnmountAction {
        match self.phase {
            MountPhase::Idle => UnmountAction::Nothing,
            MountPhase::Mounting { .. } => {
                self.phase = MountPhase::Mounting {
                    unmount_requested: true,
                };
                UnmountAction::Deferred
            }
            MountPhase::Mounted => {
                self.phase = MountPhase::Idle;
                UnmountAction::Teardown
            }
        }
    }
}
