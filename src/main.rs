fn main() {
    prexec::app::cli::run();
}
