//! Pattern resolution from arch, leg, and bunion inputs.

use sole_types::{ArchClass, Bunion, LegShape, PatternId};

/// Row index on the arch axis of the recommendation grid.
///
/// The grid has four rows: the three classifier labels plus a bunion
/// override row that supplants the arch label whenever a bunion is
/// declared. The ordering `{Flat: 0, High: 1, bunion: 2, Normal: 3}` is
/// fixed; the numeric identifiers shown to users depend on it.
const fn arch_row(arch: ArchClass, bunion: Bunion) -> u8 {
    if bunion.is_present() {
        return 2;
    }
    match arch {
        ArchClass::Flat => 0,
        ArchClass::High => 1,
        ArchClass::Normal => 3,
    }
}

/// Column index on the leg axis of the recommendation grid.
const fn leg_column(leg: LegShape) -> u8 {
    match leg {
        LegShape::OShaped => 0,
        LegShape::XShaped => 1,
        LegShape::Normal => 2,
    }
}

/// Resolves the insole recommendation identifier for one diagnosis.
///
/// Pure and total: every input combination yields exactly one identifier,
/// and the 4×3 grid of (effective arch row, leg column) maps bijectively
/// onto `1..=12` in row-major order. A declared bunion overrides the arch
/// axis for this lookup only; the displayed arch label is unaffected.
///
/// # Example
///
/// ```
/// use insole_match::resolve;
/// use sole_types::{ArchClass, Bunion, LegShape};
///
/// let id = resolve(ArchClass::Flat, LegShape::OShaped, Bunion::Absent);
/// assert_eq!(id.get(), 1);
///
/// // The bunion row ignores the arch label.
/// let a = resolve(ArchClass::High, LegShape::XShaped, Bunion::Present);
/// let b = resolve(ArchClass::Flat, LegShape::XShaped, Bunion::Present);
/// assert_eq!(a, b);
/// assert_eq!(a.get(), 8);
/// ```
#[must_use]
pub fn resolve(arch: ArchClass, leg: LegShape, bunion: Bunion) -> PatternId {
    let index = arch_row(arch, bunion) * 3 + leg_column(leg);
    // index is at most 3 * 3 + 2 = 11, inside ALL.
    PatternId::ALL[usize::from(index)]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The bunion-absent rows of the grid as an explicit oracle.
    const GRID: [(ArchClass, LegShape, u8); 9] = [
        (ArchClass::Flat, LegShape::OShaped, 1),
        (ArchClass::Flat, LegShape::XShaped, 2),
        (ArchClass::Flat, LegShape::Normal, 3),
        (ArchClass::High, LegShape::OShaped, 4),
        (ArchClass::High, LegShape::XShaped, 5),
        (ArchClass::High, LegShape::Normal, 6),
        (ArchClass::Normal, LegShape::OShaped, 10),
        (ArchClass::Normal, LegShape::XShaped, 11),
        (ArchClass::Normal, LegShape::Normal, 12),
    ];

    #[test]
    fn bunion_absent_matches_grid() {
        for (arch, leg, expected) in GRID {
            let id = resolve(arch, leg, Bunion::Absent);
            assert_eq!(id.get(), expected, "({arch:?}, {leg:?})");
        }
    }

    #[test]
    fn bunion_absent_ids_are_distinct() {
        let mut seen = [false; 12];
        for arch in ArchClass::ALL {
            for leg in LegShape::ALL {
                let id = resolve(arch, leg, Bunion::Absent);
                let slot = usize::from(id.get()) - 1;
                assert!(!seen[slot], "duplicate id {id}");
                seen[slot] = true;
            }
        }
        // 9 of 12 slots used; the bunion row {7, 8, 9} stays free.
        assert_eq!(seen.iter().filter(|&&s| s).count(), 9);
        assert!(!seen[6] && !seen[7] && !seen[8]);
    }

    #[test]
    fn bunion_present_ignores_arch() {
        let expected = [
            (LegShape::OShaped, 7),
            (LegShape::XShaped, 8),
            (LegShape::Normal, 9),
        ];
        for (leg, id) in expected {
            for arch in ArchClass::ALL {
                assert_eq!(resolve(arch, leg, Bunion::Present).get(), id);
            }
        }
    }

    #[test]
    fn resolver_is_deterministic() {
        for arch in ArchClass::ALL {
            for leg in LegShape::ALL {
                for bunion in [Bunion::Present, Bunion::Absent] {
                    let first = resolve(arch, leg, bunion);
                    let second = resolve(arch, leg, bunion);
                    assert_eq!(first, second);
                }
            }
        }
    }

    #[test]
    fn corner_combinations() {
        assert_eq!(
            resolve(ArchClass::Flat, LegShape::OShaped, Bunion::Absent).get(),
            1
        );
        assert_eq!(
            resolve(ArchClass::Normal, LegShape::Normal, Bunion::Absent).get(),
            12
        );
        assert_eq!(
            resolve(ArchClass::High, LegShape::Normal, Bunion::Present).get(),
            9
        );
    }
}
