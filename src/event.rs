//! Event hub — multiplexes terminal, file watcher, and tick events
//! into a single async channel.

use std::path::{Path, PathBuf};

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum Event {
    /// Terminal key press
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resized
    #[allow(dead_code)]
    Resize(u16, u16),
    /// The metrics file changed on disk
    MetricsChanged,
    /// Periodic tick (1 second)
    Tick,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Spawn the input reader, the tick timer, and (when a data file is
    /// given and watching is enabled) the metrics file watcher.
    pub fn new(data_file: Option<PathBuf>, watch_enabled: bool) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // Spawn crossterm event reader
        let tx_key = tx.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            while let Some(Ok(evt)) = reader.next().await {
                match evt {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        if tx_key.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                    CrosstermEvent::Mouse(mouse) => {
                        if tx_key.send(Event::Mouse(mouse)).is_err() {
                            break;
                        }
                    }
                    CrosstermEvent::Resize(w, h) => {
                        if tx_key.send(Event::Resize(w, h)).is_err() {
                            break;
                        }
                    }
                    _ => {}
                }
            }
        });

        // Spawn tick timer
        let tx_tick = tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
            loop {
                interval.tick().await;
                if tx_tick.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        // Spawn file watcher (if enabled)
        if let Some(path) = data_file.filter(|_| watch_enabled) {
            let tx_watch = tx.clone();
            tokio::spawn(async move {
                if let Err(e) = run_file_watcher(path, tx_watch).await {
                    tracing::error!(error = %e, "metrics file watcher failed");
                }
            });
        }

        EventHandler { rx }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

async fn run_file_watcher(
    data_file: PathBuf,
    tx: mpsc::UnboundedSender<Event>,
) -> color_eyre::Result<()> {
    let (wtx, mut wrx) = mpsc::channel::<()>(100);

    // Watch the parent directory so delete/recreate cycles (editors,
    // atomic writes) are still picked up.
    let watch_dir = data_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = data_file.file_name().map(|f| f.to_os_string());

    let mut debouncer = notify_debouncer_mini::new_debouncer(
        std::time::Duration::from_millis(300),
        move |result: notify_debouncer_mini::DebounceEventResult| {
            if let Ok(events) = result {
                let hit = events
                    .iter()
                    .any(|e| e.path.file_name().map(|f| f.to_os_string()) == file_name);
                if hit {
                    let _ = wtx.blocking_send(());
                }
            }
        },
    )?;

    debouncer
        .watcher()
        .watch(&watch_dir, notify::RecursiveMode::NonRecursive)?;

    // Keep debouncer alive; forward events
    while wrx.recv().await.is_some() {
        if tx.send(Event::MetricsChanged).is_err() {
            break;
        }
    }

    Ok(())
}
