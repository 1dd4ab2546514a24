use criterion::{criterion_group, criterion_main, Criterion};

use eticket_auth::{authorize, Principal, Role, RoleSet};
use eticket_core::UserId;

// The guard runs on every render of a protected screen, so it should stay
// allocation-free and flat.
fn bench_authorize(c: &mut Criterion) {
    let principal = Principal::new(UserId::new(), "Bench Visitor", Role::Organizer);
    let allowed = RoleSet::of(&[Role::Organizer, Role::Admin]);

    c.bench_function("authorize/render", |b| {
        b.iter(|| authorize(Some(std::hint::black_box(&principal)), allowed))
    });

    c.bench_function("authorize/anonymous", |b| {
        b.iter(|| authorize(std::hint::black_box(None), allowed))
    });
}

criterion_group!(benches, bench_authorize);
criterion_main!(benches);
