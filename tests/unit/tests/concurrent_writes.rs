use anyhow::Result;
use layer_logs::{parse_line, Appender, LogConfig};
use layer_logs_unit_tests::read_lines;
use std::{collections::HashMap, sync::Arc, thread};

const THREADS: usize = 8;
const LINES: usize = 200;

#[test]
fn concurrent_writes_are_not_torn() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let appender = Arc::new(Appender::new(
        LogConfig::default().with_directory(dir.path().join("logs")),
    ));

    // Large payloads make interleaved writes easy to spot
    let payload = "x".repeat(4096);

    let mut handles = Vec::new();
    for id in 0..THREADS {
        let appender = Arc::clone(&appender);
        let payload = payload.clone();
        handles.push(thread::spawn(move || {
            let layer = if id % 2 == 0 { "even" } else { "odd" };
            for line in 0..LINES {
                appender.log_message(
                    &format!("{} {} {}", id, line, payload),
                    layer,
                );
            }
        }));
    }
    for handle in handles {
        handle.join().expect("writer thread to finish");
    }

    for layer in ["even", "odd"] {
        let lines = read_lines(dir.path().join("logs").join(format!("{}.log", layer)))?;
        assert_eq!(THREADS / 2 * LINES, lines.len());

        // Lines from each thread appear in the order they were written
        let mut next: HashMap<usize, usize> = HashMap::new();
        for line in &lines {
            let (_, message) = parse_line(line).expect("timestamped line");
            let mut parts = message.splitn(3, ' ');
            let id: usize = parts.next().expect("thread id").parse()?;
            let index: usize = parts.next().expect("line index").parse()?;
            assert_eq!(Some(payload.as_str()), parts.next());

            let expected = next.entry(id).or_insert(0);
            assert_eq!(*expected, index);
            *expected += 1;
        }
        assert!(next.values().all(|count| *count == LINES));
    }
    Ok(())
}
