//! Command orchestration helpers from UI actions to the backend queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a command for the backend worker. Returns false when the command
/// could not be queued, with `status` set to a user-facing explanation.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::Verify(_) => "verify",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "Backend command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend worker disconnected (possible startup failure); restart the app"
                    .to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use checker_core::VerifyRequest;
    use crossbeam_channel::bounded;

    use super::*;

    fn request() -> VerifyRequest {
        VerifyRequest {
            file_name: "spec.pdf".into(),
            file_bytes: b"%PDF".to_vec(),
            rules: ["a".into(), "b".into(), "c".into()],
        }
    }

    #[test]
    fn dispatch_reports_full_queue() {
        let (tx, _rx) = bounded::<BackendCommand>(0);
        let mut status = String::new();
        assert!(!dispatch_backend_command(
            &tx,
            BackendCommand::Verify(request()),
            &mut status
        ));
        assert!(status.contains("full"));
    }

    #[test]
    fn dispatch_reports_disconnected_worker() {
        let (tx, rx) = bounded::<BackendCommand>(4);
        drop(rx);
        let mut status = String::new();
        assert!(!dispatch_backend_command(
            &tx,
            BackendCommand::Verify(request()),
            &mut status
        ));
        assert!(status.contains("disconnected"));
    }

    #[test]
    fn dispatch_queues_when_capacity_is_available() {
        let (tx, rx) = bounded::<BackendCommand>(4);
        let mut status = String::new();
        assert!(dispatch_backend_command(
            &tx,
            BackendCommand::Verify(request()),
            &mut status
        ));
        assert!(status.is_empty());
        assert!(rx.try_recv().is_ok());
    }
}
