use std::io::{self, Stderr, Stdout, Write};

/// Primary/diagnostic sink pair. The primary sink carries nothing but the
/// final code, so callers can parse stdout; everything else goes to the
/// diagnostic sink.
pub trait OutErr {
    fn write(&mut self, s: &str);
    fn write_err(&mut self, s: &str);
}

pub struct TotpWriter {
    out: Stdout,
    err: Stderr,
}

impl TotpWriter {
    pub fn new() -> Self {
        TotpWriter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl OutErr for TotpWriter {
    fn write(&mut self, s: &str) {
        if let Err(e) = self.out.write_all(s.as_bytes()) {
            eprintln!("{}", e);
        }
    }

    fn write_err(&mut self, s: &str) {
        if let Err(e) = self.err.write_all(s.as_bytes()) {
            eprintln!("{}", e);
        }
    }
}
