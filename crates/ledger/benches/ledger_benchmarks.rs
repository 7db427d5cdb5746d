use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, TimeZone, Utc};
use tally_core::{AccountKey, Amount};
use tally_ledger::Account;

/// Account with `n` alternating credits/debits spread over `n / 24` days.
fn seeded_account(n: usize) -> Account {
    let mut account = Account::open(AccountKey::new("bench").unwrap(), "Bench");
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    for i in 0..n {
        let at = start + Duration::hours(i as i64);
        if i % 2 == 0 {
            account.deposit_at(None, Amount::from(10), at).unwrap();
        } else {
            account.withdraw_at(Amount::from(5), at).unwrap();
        }
    }
    account
}

fn bench_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance");
    for size in [100usize, 1_000, 10_000] {
        let account = seeded_account(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &account, |b, account| {
            b.iter(|| black_box(account.balance().unwrap()));
        });
    }
    group.finish();
}

fn bench_statement_on(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_on");
    for size in [100usize, 1_000, 10_000] {
        let account = seeded_account(size);
        let day = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap().date_naive();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &account, |b, account| {
            b.iter(|| black_box(account.statement_on(day).unwrap()));
        });
    }
    group.finish();
}

fn bench_withdraw_latency(c: &mut Criterion) {
    c.bench_function("withdraw_after_10k_operations", |b| {
        b.iter_batched(
            || seeded_account(10_000),
            |mut account| {
                black_box(account.withdraw(Amount::from(1)).unwrap());
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_balance, bench_statement_on, bench_withdraw_latency);
criterion_main!(benches);
