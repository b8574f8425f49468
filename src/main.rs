fn main() {
    storefront_client::mount();
}
