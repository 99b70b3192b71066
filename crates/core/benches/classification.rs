use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timevault_core::classification::suggestions::suggest_rules;
use timevault_core::classify;
use timevault_domain::types::{
    ActivitySample, Category, Rule, RuleCondition, RuleDraft, RuleField, RuleOperator,
};

fn sample_rules(categories: &[Category]) -> Vec<Rule> {
    let category_id = categories.first().map(|c| c.id.clone());
    let needles = [
        "github.com/acme",
        "jira.acme.com",
        "acme staging",
        "release checklist",
        "quarterly report",
        "standup notes",
        "billing dashboard",
        "incident review",
    ];

    needles
        .iter()
        .enumerate()
        .map(|(idx, needle)| {
            Rule::from_draft(RuleDraft {
                condition: RuleCondition::new(
                    RuleField::WindowTitle,
                    RuleOperator::Contains,
                    *needle,
                ),
                category_id: category_id.clone(),
                project_id: Some(format!("proj-{idx}")),
                priority: idx as i32,
                is_enabled: true,
            })
        })
        .collect()
}

fn sample_history() -> Vec<ActivitySample> {
    (0..512)
        .map(|idx| match idx % 4 {
            0 => ActivitySample::new("Visual Studio Code", format!("file_{idx}.rs")),
            1 => ActivitySample::new("Google Chrome", format!("issue {idx}"))
                .with_url(format!("https://github.com/acme/app/issues/{idx}")),
            2 => ActivitySample::new("Slack", "#general | Acme"),
            _ => ActivitySample::new(format!("tool-{idx}"), String::new()),
        })
        .collect()
}

fn classification_benchmark(c: &mut Criterion) {
    let categories = Category::seed_defaults();
    let rules = sample_rules(&categories);

    let rule_hit = ActivitySample::new("Google Chrome", "release checklist - Notion");
    let inference_hit = ActivitySample::new("Visual Studio Code", "main.ts");
    let fallback = ActivitySample::new("xyz123", "");

    let mut group = c.benchmark_group("classification");
    group.sample_size(50).measurement_time(std::time::Duration::from_secs(10));

    group.bench_function("classify_rule_hit", |b| {
        b.iter(|| classify(black_box(&rule_hit), black_box(&rules), black_box(&categories)));
    });

    group.bench_function("classify_inference_hit", |b| {
        b.iter(|| classify(black_box(&inference_hit), black_box(&rules), black_box(&categories)));
    });

    group.bench_function("classify_fallback", |b| {
        b.iter(|| classify(black_box(&fallback), black_box(&rules), black_box(&categories)));
    });

    group.finish();
}

fn suggestion_benchmark(c: &mut Criterion) {
    let categories = Category::seed_defaults();
    let history = sample_history();

    let mut group = c.benchmark_group("suggestions");
    group.sample_size(20).measurement_time(std::time::Duration::from_secs(10));

    group.bench_function("suggest_rules_512_samples", |b| {
        b.iter(|| suggest_rules(black_box(&history), black_box(&categories)));
    });

    group.finish();
}

criterion_group!(core_benchmarks, classification_benchmark, suggestion_benchmark);
criterion_main!(core_benchmarks);
