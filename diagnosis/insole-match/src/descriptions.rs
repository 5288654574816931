//! Static description repository.
//!
//! Fixed, locale-specific explanatory passages keyed by display label.
//! Lookup of an unregistered key degrades to the empty string; a missing
//! description is never an error.

use sole_types::{ArchClass, LegShape};

const ARCH_FLAT: &str = "偏平足は土踏まずが低下または消失し、足裏全体が地面に接している状態です。本来、土踏まずは歩行時の衝撃を吸収する役割を持っていますが、それが機能しにくくなるため、足の疲れやすさ、足裏の痛み、膝や腰への負担増加といったトラブルが起こりやすくなります。また、外反母趾や内反小趾のリスクも高まります。長時間の立ち仕事や歩行で不調を感じることが多いため、土踏まずを支えるインソールや、足にフィットした靴選びが重要です。早めの対策が、将来的な関節トラブルの予防につながります。";

const ARCH_HIGH: &str = "ハイアーチは土踏まずが通常より高く、足裏の接地面が少ない状態です。このため、歩行や走行時の衝撃が一点に集中しやすく、足裏、かかと、膝、腰などに痛みを引き起こしやすい傾向があります。また、足の柔軟性が低下しがちで、バランスが不安定になりやすく、捻挫のリスクも増加します。クッション性のある靴や衝撃吸収性に優れたインソールを活用することで、負担を軽減し、快適な歩行が可能になります。日常的なストレッチや足のケアも予防につながります。";

const ARCH_NORMAL: &str = "正常足は土踏まずが適度に形成され、足裏全体にバランスよく荷重がかかる理想的な形です。衝撃をしっかりと吸収し、膝や腰への負担も少なく、安定した歩行が可能です。トラブルが少ない一方で、加齢や体重増加、合わない靴の使用などにより形状が崩れることがあります。定期的な足のチェックと、自分の足に合った靴選びを続けることで、健康な足を維持できます。正常だからこそ油断せず、予防の意識を持つことが大切です。";

const LEG_O: &str = "O脚は、両足を揃えて立った際に膝がくっつかず、脚全体がアルファベットの「O」のように外側に湾曲している状態です。主に骨格のゆがみや筋力バランスの崩れ、座り方・歩き方の癖が原因とされます。見た目の問題だけでなく、膝や股関節、足首に過剰な負担がかかりやすく、変形性膝関節症や膝痛のリスクが高まります。";

const LEG_X: &str = "X脚は、膝が内側に寄って接触し、足首が離れてしまう状態で、脚の形がアルファベットの「X」に見えるのが特徴です。歩行時に膝の内側や足首に負担がかかりやすく、痛みや疲れ、将来的な関節障害の原因となることもあります。";

const LEG_NORMAL: &str = "正常脚は、まっすぐに立ったときに太もも・膝・ふくらはぎ・くるぶしが自然に接する、バランスのとれた脚の状態です。体重が均等に分散され、膝や足首、腰などに無理な負荷がかかりにくいです。";

const BUNION: &str = "外反母趾とは、足の親指（母趾）が外側に曲がり、付け根の関節が内側に突出して変形する症状です。適切な靴選びや、足指を広げる体操・インソールによるサポートで進行を防ぐことが可能です。";

/// Key under which the bunion passage is registered.
pub const BUNION_KEY: &str = "外反母趾";

/// Looks up the description registered for a display label.
///
/// Returns the empty string for unregistered keys.
///
/// # Example
///
/// ```
/// use insole_match::descriptions;
///
/// assert!(descriptions::lookup("Flat").contains("偏平足"));
/// assert_eq!(descriptions::lookup("unknown"), "");
/// ```
#[must_use]
pub fn lookup(key: &str) -> &'static str {
    match key {
        "Flat" => ARCH_FLAT,
        "High" => ARCH_HIGH,
        "Normal" => ARCH_NORMAL,
        "O脚" => LEG_O,
        "X脚" => LEG_X,
        "正常" => LEG_NORMAL,
        BUNION_KEY => BUNION,
        _ => "",
    }
}

/// Returns the explanatory passage for an arch class.
#[must_use]
pub fn arch_description(arch: ArchClass) -> &'static str {
    lookup(arch.as_str())
}

/// Returns the explanatory passage for a leg shape.
#[must_use]
pub fn leg_description(leg: LegShape) -> &'static str {
    lookup(leg.label())
}

/// Returns the bunion passage, shown only when a bunion is declared.
#[must_use]
pub fn bunion_description() -> &'static str {
    lookup(BUNION_KEY)
}
