use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use docstore_session::inmemory::InMemorySessionTable;
use docstore_session::{SessionHandler, SessionId, SessionStore};

fn bench_id(raw: &str) -> SessionId {
    SessionId::try_from(raw).expect("bench id")
}

fn inmemory_benches(c: &mut Criterion) {
    let store = SessionStore::new(InMemorySessionTable::new());
    let payload = "cart|a:2:{i:0;s:3:\"sku\";i:1;s:4:\"sku2\";}";

    c.bench_function("inmemory_write", |b| {
        let ids: Vec<SessionId> = (0..16).map(|n| bench_id(&format!("bench-write-{n}"))).collect();
        let mut counter = 0usize;
        b.iter(|| {
            counter = counter.wrapping_add(1);
            let id = &ids[counter % ids.len()];
            black_box(store.write(id, payload).expect("write"));
        });
    });

    c.bench_function("inmemory_read", |b| {
        let id = bench_id("bench-read");
        store.write(&id, payload).expect("seed read");
        b.iter(|| {
            black_box(store.read(&id).expect("read"));
        });
    });

    c.bench_function("inmemory_gc_noop", |b| {
        b.iter(|| {
            black_box(store.gc(1440).expect("gc"));
        });
    });
}

criterion_group!(session_ops, inmemory_benches);
criterion_main!(session_ops);
