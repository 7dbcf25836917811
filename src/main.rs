fn main() {
    dntx::run_cli();
}
