use anyhow::Result;

fn main() -> Result<()> {
    convo_search::cli::run()
}
