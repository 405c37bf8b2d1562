use std::fmt;
use std::path::PathBuf;

use quiz_core::model::QuestionRecord;
use storage::FsQuestionRepository;

#[derive(Debug, Clone)]
struct Args {
    dir: PathBuf,
    start: u32,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDir { raw: String },
    InvalidStart { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDir { raw } => write!(f, "invalid --dir value: {raw}"),
            ArgsError::InvalidStart { raw } => write!(f, "invalid --start value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut dir = std::env::var("QUIZ_QUESTIONS_DIR")
            .map_or_else(|_| PathBuf::from("questions"), PathBuf::from);
        let mut start = 1_u32;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dir" => {
                    let value = require_value(&mut args, "--dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDir { raw: value });
                    }
                    dir = PathBuf::from(value);
                }
                "--start" => {
                    let value = require_value(&mut args, "--start")?;
                    start = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidStart { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { dir, start })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --dir <path>              Question directory (default: questions)");
    eprintln!("  --start <n>               Number of the first file written (default: 1)");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS_DIR");
}

fn samples() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new(
            1,
            "Python",
            "General",
            "What is the average time complexity of a lookup in a Python <code>dict</code>?",
            ["O(1)", "O(log n)", "O(n)", "O(n log n)"],
            0,
        )
        .with_explanation(
            "Dictionaries are hash tables, so a lookup hashes the key and jumps to its bucket.\n\
             ```python\nages = {\"ada\": 36}\nprint(ages[\"ada\"])\n```\n\
             Collisions make the **worst case** O(n), but the average stays constant.",
        )
        .with_complexity("O(1) average", "O(n)"),
        QuestionRecord::new(
            2,
            "Data Structures",
            "General",
            "Which structure serves elements in first-in, first-out order?",
            ["Stack", "Queue", "Binary heap", "Trie"],
            1,
        )
        .with_explanation("A **queue** removes the oldest element first.")
        .with_complexity("O(1) enqueue/dequeue", "O(n)")
        .with_video(
            "https://www.youtube.com/results?search_query=queue+data+structure",
            Some("Queues explained".into()),
        ),
        QuestionRecord::new(
            3,
            "Python",
            "Mid Level",
            "What does <code>list.sort()</code> return?",
            ["The sorted list", "A new sorted copy", "None", "An iterator"],
            2,
        )
        .with_explanation(
            "`list.sort()` sorts **in place** and returns `None`; use `sorted()` for a copy.\n\
             ```python\nxs = [3, 1, 2]\nassert xs.sort() is None\n```",
        )
        .with_complexity("O(n log n)", "O(n)"),
        QuestionRecord::new(
            4,
            "Data Structures",
            "Senior Level",
            "Which operation is O(log n) on a balanced binary search tree but O(n) on an unbalanced one?",
            ["Insert", "Reading the root", "Counting nodes", "Creating an empty tree"],
            0,
        )
        .with_explanation("Insertion walks one root-to-leaf path, whose length is the tree height.")
        .with_complexity("O(log n) balanced, O(n) worst", "O(1) extra"),
    ]
}

/// File numbers `start..start + count`, rejecting a range past `u32::MAX`.
fn file_numbers(start: u32, count: usize) -> Result<Vec<u32>, ArgsError> {
    (0..count)
        .map(|offset| {
            u32::try_from(offset)
                .ok()
                .and_then(|offset| start.checked_add(offset))
                .ok_or_else(|| ArgsError::InvalidStart {
                    raw: start.to_string(),
                })
        })
        .collect()
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let repo = FsQuestionRepository::new(&args.dir);
    let records = samples();
    let numbers = file_numbers(args.start, records.len())?;
    for (number, record) in numbers.into_iter().zip(&records) {
        repo.write_question(number, record).await?;
    }

    println!(
        "Seeded {} questions into {}",
        records.len(),
        repo.dir().display()
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
