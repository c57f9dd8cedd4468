fn main() -> anyhow::Result<()> {
    cardflip_cli::run()
}
