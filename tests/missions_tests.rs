// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pointfeed::loaders::missions::{self, IconResolver, LabelJoin};
use pointfeed::loaders::{Dataset, SourceText, missions_from_text};
use pointfeed::models::SpendWindow;
use pointfeed::parser::{rfc4180, simple};

const ICON_BASE: &str = "https://store.example/storage/v1/object/public/mission-icon/";

const RAW: &str = "\u{feff}기업명,제휴여부,미션유형,미션제목,적립포인트,미션내용,링크
CJ제일제당,Y,구매,햇반 구매하기,1500,\"첫째 줄
둘째 줄\",https://a.example
올리브영,N,참여,설문 참여,abc,,https://b.example
CGV,N,SNS,공유하기,,내용,
";

const LABELED: &str = "mission_title,mission_action_type
햇반 구매하기,PurchaseReward
설문 참여,Survey
";

fn icons() -> IconResolver {
    IconResolver::new("https://store.example/")
}

#[test]
fn builds_one_mission_per_raw_row() {
    let items = missions_from_text(RAW, LABELED, &icons());
    assert_eq!(items.len(), 3);
    assert_eq!(
        items.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    let first = &items[0];
    assert_eq!(first.title, "햇반 구매하기");
    assert_eq!(first.point, 1500);
    assert_eq!(first.content, "첫째 줄\n둘째 줄");
    assert_eq!(first.link, "https://a.example");
    assert_eq!(first.mission_type, "구매");
    assert_eq!(first.action_type, "PurchaseReward");
    assert_eq!(first.icon_url, format!("{}PurchaseReward.svg", ICON_BASE));
}

#[test]
fn malformed_or_empty_points_default_to_zero() {
    let items = missions_from_text(RAW, LABELED, &icons());
    assert_eq!(items[1].point, 0);
    assert_eq!(items[2].point, 0);

    let items = missions_from_text("미션제목,적립포인트\nA,-30\nB, 20 \n", "", &icons());
    assert_eq!(items[0].point, 0);
    assert_eq!(items[1].point, 20);
}

#[test]
fn unknown_action_type_gets_svg_suffix_and_missing_label_clicks() {
    let items = missions_from_text(RAW, LABELED, &icons());
    assert_eq!(items[1].action_type, "Survey");
    assert_eq!(items[1].icon_url, format!("{}Survey.svg", ICON_BASE));
    assert_eq!(items[2].action_type, "Click");
    assert_eq!(items[2].icon_url, format!("{}Click.svg", ICON_BASE));
    assert_eq!(items[2].link, "");
}

#[test]
fn icon_table_keeps_extensionless_uploads() {
    assert_eq!(IconResolver::file_name("SNS"), "SNS");
    assert_eq!(IconResolver::file_name("Participate"), "Participate");
    assert_eq!(IconResolver::file_name("Click"), "Click.svg");
    assert_eq!(IconResolver::file_name("Quiz"), "Quiz.svg");
    assert_eq!(
        IconResolver::new("").resolve("SNS"),
        "/storage/v1/object/public/mission-icon/SNS"
    );
}

#[test]
fn missing_columns_yield_defaults() {
    let items = missions_from_text("미션제목\n출석 체크\n", "", &icons());
    assert_eq!(items.len(), 1);
    let m = &items[0];
    assert_eq!(m.title, "출석 체크");
    assert_eq!(m.point, 0);
    assert_eq!(m.content, "");
    assert_eq!(m.link, "");
    assert_eq!(m.mission_type, "");
    assert_eq!(m.action_type, "Click");
}

#[test]
fn spaced_header_variants_are_found() {
    let items = missions_from_text(
        "미션 제목,미션제목,적립 포인트,미션 내용\nx,출석,300,매일 방문\n",
        "",
        &icons(),
    );
    assert_eq!(items[0].title, "출석");
    assert_eq!(items[0].point, 300);
    assert_eq!(items[0].content, "매일 방문");
}

#[test]
fn labels_join_by_mission_id_when_both_sides_carry_it() {
    let raw = rfc4180::parse("mission_id,미션제목,적립포인트\n10,첫째,100\n20,둘째,200\n");
    let labeled = simple::parse("mission_id,mission_action_type\n20,SNS\n10,Participate\n");
    assert_eq!(
        LabelJoin::detect(&raw, &labeled),
        LabelJoin::Keyed("mission_id".into())
    );

    let items = missions::load(&raw, &labeled, &icons());
    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].action_type, "Participate");
    assert_eq!(items[1].action_type, "SNS");
    assert_eq!(items[1].icon_url, format!("{}SNS", ICON_BASE));
}

#[test]
fn labels_fall_back_to_position_without_keys() {
    let raw = rfc4180::parse("mission_id,미션제목\n10,첫째\n20,둘째\n");
    let labeled = simple::parse("mission_action_type\nSNS\nParticipate\n");
    assert_eq!(LabelJoin::detect(&raw, &labeled), LabelJoin::Positional);

    let items = missions::load(&raw, &labeled, &icons());
    assert_eq!(items[0].action_type, "SNS");
    assert_eq!(items[1].action_type, "Participate");
}

#[test]
fn reloading_same_source_is_stable() {
    let a = missions_from_text(RAW, LABELED, &icons());
    let b = missions_from_text(RAW, LABELED, &icons());
    assert_eq!(a, b);
}

#[test]
fn dataset_derives_both_screens_from_injected_text() {
    let src = SourceText {
        mission_raw: RAW.to_string(),
        mission_labeled: LABELED.to_string(),
        transactions: "거래일자,브랜드,브랜드명,구매금액,적립포인트,사용포인트\n20260102,A,올리브영,700,7,0\n"
            .to_string(),
        domains: "brand_code,domain\nA,Beauty\n".to_string(),
    };
    let ds = Dataset::derive(&src, &icons(), &SpendWindow::default());
    assert_eq!(ds.missions.len(), 3);
    assert_eq!(ds.missions[0].icon_url, format!("{}PurchaseReward.svg", ICON_BASE));
    assert_eq!(ds.summary.total_spend, 700);
    assert_eq!(ds.summary.domain_spend[0].name, "Beauty");

    let empty = Dataset::derive(&SourceText::default(), &icons(), &SpendWindow::default());
    assert_eq!(empty, Dataset::default());
}

#[test]
fn recommend_falls_back_to_first_three_static_missions() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("raw.csv");
    let labeled = dir.path().join("labeled.csv");
    std::fs::write(
        &raw,
        "미션유형,미션제목,적립포인트\n구매,a,10\n구매,b,20\n참여,c,30\n참여,d,40\n",
    )
    .unwrap();
    std::fs::write(&labeled, "mission_action_type\nClick\nSNS\nClick\nClick\n").unwrap();

    let out = assert_cmd::Command::cargo_bin("pointfeed")
        .unwrap()
        .env("POINTFEED_MISSION_API", "http://127.0.0.1:9")
        .env_remove("POINTFEED_API_KEY")
        .args(["--config", dir.path().join("config.json").to_str().unwrap()])
        .args(["missions", "recommend", "--json"])
        .args(["--raw", raw.to_str().unwrap(), "--labeled", labeled.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let items: Vec<pointfeed::models::MissionItem> = serde_json::from_slice(&out).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(
        items.iter().map(|m| m.title.as_str()).collect::<Vec<_>>(),
        vec!["a", "b", "c"]
    );
    assert_eq!(items[1].action_type, "SNS");
    assert_eq!(items[2].point, 30);
}
