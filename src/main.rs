fn main() {
    prioflow::app::startup::startup();
}
