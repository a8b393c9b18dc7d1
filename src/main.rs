fn main() {
    cenario::cli::run();
}
