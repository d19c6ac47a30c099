//! Split-by-pages demo
//!
//! Configures a split-by-pages task, registers the three built-in listeners
//! (progress, failure, completion), and executes it against the engine found
//! on this host. Exits non-zero if the task fails.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example split_by_pages -- test.pdf /tmp/output1
//! ```

use doctask::{
    CompletionLogListener, Config, FailureListener, NotificationContext, OutputTarget,
    ProgressLogListener, SplitOperation, TaskExecutor, TaskParameters,
};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let source = args.next().unwrap_or_else(|| "test.pdf".to_string());
    let output = args.next().unwrap_or_else(|| "/tmp/output1".to_string());

    let config = Config::default();

    // Configure the split-by-pages task: split at page 10 and 20
    let params = TaskParameters {
        sources: vec![PathBuf::from(source)],
        operation: SplitOperation::ByPages {
            pages: vec![10, 20],
        },
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
            eprintln!("split by pages failed: {err}");
            std::process::exit(1);
        }
    }
}
