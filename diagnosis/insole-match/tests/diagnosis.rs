//! End-to-end tests for the diagnosis pipeline with a stub classifier.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::NaiveDate;
use insole_match::{diagnose, DiagnosisRequest};
use sole_types::{
    ArchClass, ArchClassifier, ArchPrediction, Bunion, ClassifyError, LegShape, SoleScan,
};

/// Classifier stub returning a fixed probability vector in classifier
/// index order `{High, Normal, Flat}`.
struct StubClassifier([f32; 3]);

impl ArchClassifier for StubClassifier {
    fn classify(&self, _scan: &SoleScan) -> Result<ArchPrediction, ClassifyError> {
        ArchPrediction::from_probabilities(self.0).map_err(|e| ClassifyError::backend(e.to_string()))
    }
}

fn scan() -> SoleScan {
    SoleScan::new(vec![0.25; SoleScan::VALUE_COUNT]).unwrap()
}

fn request(leg: LegShape, bunion: Bunion) -> DiagnosisRequest {
    DiagnosisRequest {
        leg,
        bunion,
        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    }
}

#[test]
fn flat_o_shaped_without_bunion() {
    let classifier = StubClassifier([0.1, 0.1, 0.8]);
    let diagnosis = diagnose(&classifier, &scan(), &request(LegShape::OShaped, Bunion::Absent))
        .expect("diagnosis failed");

    assert_eq!(diagnosis.prediction.predicted(), ArchClass::Flat);
    assert_eq!(diagnosis.pattern.get(), 1);

    let text = diagnosis.report.to_plain_text();
    assert!(text.contains("AI診断アーチ分類：Flat"));
    assert!(text.contains("脚の形状：O脚"));
    assert!(text.contains("外反母趾：なし"));
    assert!(text.contains("分類パターンID：1 / 12"));
    assert!(text.contains("[アーチ説明]"));
    assert!(text.contains("[脚型説明]"));
    assert!(!text.contains("[外反母趾説明]"));
}

#[test]
fn high_normal_leg_with_bunion() {
    let classifier = StubClassifier([0.85, 0.1, 0.05]);
    let diagnosis = diagnose(
        &classifier,
        &scan(),
        &request(LegShape::Normal, Bunion::Present),
    )
    .expect("diagnosis failed");

    // The bunion row supplants the arch axis for the pattern only.
    assert_eq!(diagnosis.prediction.predicted(), ArchClass::High);
    assert_eq!(diagnosis.pattern.get(), 9);

    let text = diagnosis.report.to_plain_text();
    assert!(text.contains("AI診断アーチ分類：High"));
    assert!(text.contains("外反母趾：あり"));
    assert!(text.contains("[外反母趾説明]"));
    assert_eq!(diagnosis.report.sections().len(), 3);
}

#[test]
fn all_leg_shapes_share_the_bunion_row() {
    let scan = scan();
    for leg in LegShape::ALL {
        let mut ids = Vec::new();
        for probabilities in [[0.8, 0.1, 0.1], [0.1, 0.8, 0.1], [0.1, 0.1, 0.8]] {
            let classifier = StubClassifier(probabilities);
            let diagnosis = diagnose(&classifier, &scan, &request(leg, Bunion::Present))
                .expect("diagnosis failed");
            ids.push(diagnosis.pattern.get());
        }
        assert_eq!(ids[0], ids[1]);
        assert_eq!(ids[1], ids[2]);
        assert!((7..=9).contains(&ids[0]));
    }
}
