//! `mulbench` binary: scalar multiplication timing across four precisions.

fn main() -> anyhow::Result<()> {
    mulbench_cli::run()
}
