fn main() -> anyhow::Result<()> {
    mbkit::cli::run_cli()
}
