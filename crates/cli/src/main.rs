use anyhow::Result;

fn main() -> Result<()> {
    guess_cli::main_entry()
}
