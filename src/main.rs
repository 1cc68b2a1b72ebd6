fn main() {
    nswp::app::cli::run();
}
