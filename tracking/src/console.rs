use common::capabilities::Listener;
use std::io::{self, BufRead, Write};

/// Reads "recognized speech" from standard input, one line per request.
#[derive(Debug, Default)]
pub struct StdinListener;

impl Listener for StdinListener {
    fn listen(&mut self) -> Option<String> {
        print!("🎤 > ");
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let heard = line.trim();
                (!heard.is_empty()).then(|| heard.to_string())
            }
        }
    }
}
