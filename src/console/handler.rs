use log::{error, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::portal::Portal;
use crate::protocol::responses::{self, format_response};
use crate::protocol::{CommandStatus, handle_command, parse_command};

/// Runs the portal console over a line reader and a writer.
///
/// - Greets, and reports a restored session if there is one.
/// - Reads one command line at a time and dispatches it with `handle_command`.
/// - Answers a line that is not UTF-8 with an error reply and keeps going.
/// - Stops on `QUIT` or end of input.
pub async fn run_console<R, W>(
    portal: &mut Portal,
    mut reader: R,
    writer: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let max_command_length = portal.config().console.max_command_length;

    let ready = format_response(
        responses::READY,
        "University portal ready (HELP for commands)",
    );
    writer.write_all(ready.as_bytes()).await?;
    if let Some(user) = portal.current_user() {
        let greeting = format!("Resumed session for {} ({})", user.username, user.role);
        writer
            .write_all(format_response(responses::OK, &greeting).as_bytes())
            .await?;
    }
    writer.flush().await?;

    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => {
                info!("End of input; closing console");
                break;
            }
            Ok(_) => {
                if buf.len() > max_command_length {
                    let reply = format_response(responses::INTERNAL_ERROR, "Command too long");
                    writer.write_all(reply.as_bytes()).await?;
                    writer.flush().await?;
                    continue;
                }

                let Ok(line) = std::str::from_utf8(&buf) else {
                    warn!("Discarding console input that is not valid UTF-8");
                    let reply =
                        format_response(responses::INVALID_INPUT, "Input is not valid UTF-8");
                    writer.write_all(reply.as_bytes()).await?;
                    writer.flush().await?;
                    continue;
                };

                let trimmed = line.trim_end_matches(['\r', '\n']);
                if trimmed.trim().is_empty() {
                    continue;
                }

                let command = parse_command(trimmed);
                let result = handle_command(portal, &command);

                if let Some(msg) = &result.message {
                    writer.write_all(msg.as_bytes()).await?;
                    writer.flush().await?;
                }

                if result.status == CommandStatus::CloseConnection {
                    info!("Console closed by QUIT");
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read console input: {}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}
