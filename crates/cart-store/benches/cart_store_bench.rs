use cart_store::{CartStore, CustomerId, InMemoryCartStore, ProductId};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_create_cart(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryCartStore::new();

    c.bench_function("cart_store/create", |b| {
        b.iter(|| {
            rt.block_on(async {
                store.create(CustomerId::new(1)).await.unwrap();
            });
        });
    });
}

fn bench_add_item_same_product(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryCartStore::new();
    let cart = rt.block_on(store.create(CustomerId::new(1))).unwrap();

    c.bench_function("cart_store/add_item_same_product", |b| {
        b.iter(|| {
            rt.block_on(async {
                store
                    .add_item(cart.cart_id, ProductId::new(100), 1)
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_get_cart_with_50_items(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryCartStore::new();

    // Pre-populate one cart with 50 distinct products
    let cart = rt.block_on(async {
        let cart = store.create(CustomerId::new(1)).await.unwrap();
        for product in 1..=50 {
            store
                .add_item(cart.cart_id, ProductId::new(product), 2)
                .await
                .unwrap();
        }
        cart
    });

    c.bench_function("cart_store/get_cart_50_items", |b| {
        b.iter(|| {
            rt.block_on(async {
                let cart = store.get(cart.cart_id).await.unwrap();
                assert_eq!(cart.item_count(), 50);
            });
        });
    });
}

fn bench_create_then_delete(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryCartStore::new();

    c.bench_function("cart_store/create_then_delete", |b| {
        b.iter(|| {
            rt.block_on(async {
                let cart = store.create(CustomerId::new(1)).await.unwrap();
                store.delete(cart.cart_id).await.unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_create_cart,
    bench_add_item_same_product,
    bench_get_cart_with_50_items,
    bench_create_then_delete,
);
criterion_main!(benches);
