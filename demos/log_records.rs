use chrono::{DateTime, Duration, Local};
use tracing_subscriber::EnvFilter;
use tri_list::{Element, TriList, TriListError};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Level {
    Info,
    Warn,
    Error,
}

/// A log stream: timestamps, messages and severity markers, interleaved
type LogStream = TriList<DateTime<Local>, String, Level>;

fn main() -> Result<(), TriListError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let start = Local::now();
    let mut stream = LogStream::new()
        .with(start)
        .with(Level::Info)
        .with("service started".to_string())
        .with(start + Duration::seconds(5))
        .with(Level::Warn)
        .with("cache miss rate above 40%".to_string())
        .with(start + Duration::seconds(9))
        .with(Level::Error)
        .with("upstream timed out".to_string());

    // Show times relative to startup, shout errors
    stream.modify_only(move |t: DateTime<Local>| {
        DateTime::<Local>::from(std::time::UNIX_EPOCH) + (t - start)
    });
    stream.modify_only(|m: String| format!("\"{}\"", m));

    for record in &stream {
        match record {
            Element::First(t) => print!("\n+{}s ", t.timestamp()),
            Element::Second(m) => print!("{}", m),
            Element::Third(level) => print!("[{:?}] ", level),
        }
    }
    println!();

    let serious = stream
        .range_over::<Level, _>()
        .filter(|level| *level != Level::Info)
        .count();
    println!("{} records at warn or above", serious);

    // Positional reads go through the same chains
    let first_message = stream.get_as::<String, _>(2)?;
    println!("First message: {}", first_message);

    if let Err(e) = stream.get_as::<Level, _>(0) {
        println!("Expected failure: {}", e);
    }

    stream.reset_all();
    let started = stream.get_as::<DateTime<Local>, _>(0)?;
    println!("Started at {}", started.format("%Y-%m-%d %H:%M:%S"));

    Ok(())
}
