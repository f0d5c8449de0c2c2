fn main() -> anyhow::Result<()> {
    pointer_tracker_lib::run()
}
