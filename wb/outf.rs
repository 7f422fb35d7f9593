static OUTF: std::sync::Mutex<Option<std::fs::File>> = std::sync::Mutex::new(None);

/// Route `outfprintln!` to `path`, truncating it, or to stdout when `None`.
pub fn init(path: &Option<std::path::PathBuf>) -> Result<(), std::io::Error> {
    static CALLED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if CALLED.swap(true, std::sync::atomic::Ordering::SeqCst) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "outf::init() called more than once",
        ));
    }
    if let Some(path) = path {
        let f = std::fs::File::create(path)?;
        match OUTF.lock() {
            Ok(mut file) => *file = Some(f),
            Err(_) => log::error!("Lock failed, writing to stdout instead"),
        }
    }
    Ok(())
}

fn try_write_line(s: &str) -> Result<(), std::io::Error> {
    use std::io::Write;
    let file = OUTF
        .lock()
        .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "Output file lock poisoned"))?;
    match file.as_ref() {
        Some(mut f) => writeln!(f, "{s}"),
        None => writeln!(std::io::stdout().lock(), "{s}"),
    }
}

/// Falls back to stdout when the report file can't be written.
pub fn write_line(s: &str) {
    if let Err(e) = try_write_line(s) {
        log::error!("Report line not written to file: {e}");
        println!("{s}");
    }
}

// Formats like `println!` and sends the line to the report file chosen at
// `init()`, or to stdout when there is none.
#[macro_export]
macro_rules! outfprintln {
    ($($arg:tt)*) => {
        $crate::outf::write_line(&format!($($arg)*))
    }
}

pub use outfprintln;
