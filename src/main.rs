fn main() {
    codeai_landing::start();
}
