use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use trashsweep::config::Ini;
use trashsweep::dav::parse_multistatus;
use trashsweep::{Rule, RuleFile, TrashEntry, select_candidates};

fn listing(count: usize) -> Vec<TrashEntry> {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let names = ["app.log", "backup.tar.gz", "IMG_0001.jpg", "notes.md", "tmp-build"];
    (0..count)
        .map(|i| {
            let name = names[i % names.len()];
            TrashEntry::new(
                format!("/remote.php/dav/trashbin/alice/trash/{name}.d{i}"),
                Some(now - Duration::days(i64::try_from(i % 90).unwrap_or(0))),
                false,
            )
        })
        .collect()
}

fn rules() -> Vec<Rule> {
    vec![
        Rule::new("Logs", r".*\.log\.d\d+$", 7).unwrap(),
        Rule::new("Backups", r"backup\.", 30).unwrap(),
        Rule::new("Photos", r"IMG_\d{4}", 60).unwrap(),
        Rule::new("Scratch", r"tmp-", 1).unwrap(),
    ]
}

fn bench_select_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_candidates");
    let rules = rules();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

    for size in [100, 1_000, 10_000] {
        let entries = listing(size);
        group.bench_function(format!("{size}_entries"), |b| {
            b.iter(|| select_candidates(black_box(&entries), black_box(&rules), now).len());
        });
    }

    group.finish();
}

fn bench_parse_multistatus(c: &mut Criterion) {
    let mut xml = String::from(r#"<d:multistatus xmlns:d="DAV:">"#);
    for i in 0..1_000 {
        xml.push_str(&format!(
            "<d:response><d:href>/remote.php/dav/trashbin/alice/trash/file{i}.txt.d{i}</d:href>\
             <d:propstat><d:prop><d:getlastmodified>Tue, 14 Nov 2023 22:13:20 GMT</d:getlastmodified>\
             <d:resourcetype/></d:prop></d:propstat></d:response>"
        ));
    }
    xml.push_str("</d:multistatus>");

    c.bench_function("parse_multistatus/1000_responses", |b| {
        b.iter(|| parse_multistatus(black_box(&xml)));
    });
}

fn bench_rule_file(c: &mut Criterion) {
    let text = "[DEFAULT]
minimum_age = 14

[Nextcloud]
url = https://cloud.example.org
username = alice
password = hunter2
threshold = 50

[Logs]
pattern = .*\\.log
minimum_age = 3

[Backups]
pattern = backup-.*

[Photos]
pattern = IMG_\\d+
";

    c.bench_function("RuleFile::from_ini", |b| {
        b.iter(|| {
            let ini = Ini::parse(black_box(text)).unwrap();
            RuleFile::from_ini(&ini).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_select_candidates,
    bench_parse_multistatus,
    bench_rule_file
);
criterion_main!(benches);
