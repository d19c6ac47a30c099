//! Split-by-text-area demo
//!
//! Splits a document wherever the text inside a rectangular page region
//! changes, registering the same listener trio as the split-by-pages demo.
//! Exits non-zero if the task fails.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example split_by_text -- test.pdf /tmp/output2
//! ```

use doctask::{
    CompletionLogListener, Config, FailureListener, NotificationContext, OutputTarget, PageArea,
    ProgressLogListener, SplitOperation, TaskExecutor, TaskParameters,
};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let source = args.next().unwrap_or_else(|| "test.pdf".to_string());
    let output = args.next().unwrap_or_else(|| "/tmp/output2".to_string());

    let config = Config::default();

    // Text area boundaries driving the split decisions
    let area = PageArea {
        x: 10,
        y: 20,
        width: 100,
        height: 200,
    };

    let params = TaskParameters {
        sources: vec![PathBuf::from(source)],
        operation: SplitOperation::ByTextArea { area },
        output: OutputTarget::Directory(PathBuf::from(output)),
        conflict_policy: config.default_conflict_policy(),
    };

    // Register listeners to get events about progress, failure, completion
    let mut ctx = NotificationContext::new();
    ctx.add_listener(Box::new(ProgressLogListener));
    ctx.add_listener(Box::new(FailureListener));
    ctx.add_listener(Box::new(CompletionLogListener));

    // Execute the task
    let executor = TaskExecutor::from_config(&config);
    match executor.execute(&params, &ctx).await {
        Ok(outcome) => {
            for path in &outcome.outputs {
                println!("wrote {}", path.display());
            }
        }
        Err(err) => {
            eprintln!("split by text failed: {err}");
            std::process::exit(1);
        }
    }
}
