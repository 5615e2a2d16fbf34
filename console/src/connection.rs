use super::commands::{ConsoleInput, ConsoleOutput};
use super::decoder::Decoder;
use super::encoder::Encoder;
use log::debug;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

pub struct ConsoleConnection {
    output_tx: Option<Sender<ConsoleOutput>>,
    output_handle: Option<JoinHandle<()>>,
}

impl Default for ConsoleConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleConnection {
    pub fn new() -> Self {
        let (output_tx, output_rx) = channel();

        let output_handle = Self::spawn_output_handler(output_rx);

        Self {
            output_tx: Some(output_tx),
            output_handle: Some(output_handle),
        }
    }

    /// A handle for sending output outside of `listen`.
    pub fn sender(&self) -> Sender<ConsoleOutput> {
        self.output_tx
            .clone()
            .expect("sender requested after the connection was closed")
    }

    // Reads commands until `quit` or end of input; the callback gets a sender for responses.
    pub fn listen<F>(&mut self, mut callback: F) -> io::Result<()>
    where
        F: FnMut(&ConsoleInput, Sender<ConsoleOutput>) -> Result<(), Box<dyn Error>>,
    {
        let decoder = Decoder::new();
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let output_tx = self.sender();

        loop {
            let mut in_line = String::new();
            let input = if reader.read_line(&mut in_line)? == 0 {
                debug!("End of input");
                ConsoleInput::Quit
            } else {
                debug!("Input: {:?}", in_line.trim());
                decoder.decode(&in_line)
            };

            if let Err(e) = callback(&input, output_tx.clone()) {
                debug!("Callback error: {:?}", e);
                let _ = output_tx.send(ConsoleOutput::Error(e.to_string()));
            }

            if matches!(input, ConsoleInput::Quit) {
                break;
            }
        }

        Ok(())
    }

    /// Stop accepting output and wait until everything sent so far is printed.
    pub fn close(&mut self) {
        self.output_tx.take();
        if let Some(handle) = self.output_handle.take() {
            if handle.join().is_err() {
                debug!("Output thread panicked");
            }
        }
    }

    fn spawn_output_handler(output_rx: Receiver<ConsoleOutput>) -> JoinHandle<()> {
        thread::spawn(move || {
            let encoder = Encoder;
            let stdout = io::stdout();

            while let Ok(output) = output_rx.recv() {
                let out_line = encoder.encode(&output);
                debug!("Output: {:?}", out_line);

                let mut handle = stdout.lock();
                let _ = writeln!(handle, "{}", out_line);
                let _ = handle.flush();
            }
        })
    }
}

impl Drop for ConsoleConnection {
    fn drop(&mut self) {
        self.close();
    }
}
