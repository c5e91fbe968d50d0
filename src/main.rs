fn main() {
    codepath::app::cli::run();
}
