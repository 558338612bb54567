fn main() -> anyhow::Result<()> {
    lovely_labels::run()?;
    Ok(())
}
