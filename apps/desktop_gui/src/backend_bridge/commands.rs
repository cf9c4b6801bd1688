//! Backend commands queued from UI to backend worker.

use checker_core::VerifyRequest;

pub enum BackendCommand {
    Verify(VerifyRequest),
}
