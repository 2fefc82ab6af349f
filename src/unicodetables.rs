// Generated by gen-unicode from the Unicode Character Database. Do not edit.
// gen-unicode ucd-11.0.0 Armenian Braille Cherokee Deseret Dogra Georgian Gothic Gunjala_Gondi Gurmukhi Hanifi_Rohingya Hebrew Makasar Medefaidrin Ogham Old_Sogdian Osage Runic Sogdian Thaana Thai Tifinagh Ugaritic Yi

use crate::codepointset::Interval;
use crate::table::ScriptData;

/// The version of the Unicode Character Database the tables were generated from.
pub const UNICODE_VERSION: (u8, u8, u8) = (11, 0, 0);

const ARMENIAN: [Interval; 5] = [
    Interval::new(0x0531, 0x0556),
    Interval::new(0x0559, 0x0588),
    Interval::new(0x058A, 0x058A),
    Interval::new(0x058D, 0x058F),
    Interval::new(0xFB13, 0xFB17),
];

const BRAILLE: [Interval; 1] = [
    Interval::new(0x2800, 0x28FF),
];

const CHEROKEE: [Interval; 3] = [
    Interval::new(0x13A0, 0x13F5),
    Interval::new(0x13F8, 0x13FD),
    Interval::new(0xAB70, 0xABBF),
];

const DESERET: [Interval; 1] = [
    Interval::new(0x10400, 0x1044F),
];

const DOGRA: [Interval; 1] = [
    Interval::new(0x11800, 0x1183B),
];

const GEORGIAN: [Interval; 10] = [
    Interval::new(0x10A0, 0x10C5),
    Interval::new(0x10C7, 0x10C7),
    Interval::new(0x10CD, 0x10CD),
    Interval::new(0x10D0, 0x10FA),
    Interval::new(0x10FC, 0x10FF),
    Interval::new(0x1C90, 0x1CBA),
    Interval::new(0x1CBD, 0x1CBF),
    Interval::new(0x2D00, 0x2D25),
    Interval::new(0x2D27, 0x2D27),
    Interval::new(0x2D2D, 0x2D2D),
];

const GOTHIC: [Interval; 1] = [
    Interval::new(0x10330, 0x1034A),
];

const GUNJALA_GONDI: [Interval; 6] = [
    Interval::new(0x11D60, 0x11D65),
    Interval::new(0x11D67, 0x11D68),
    Interval::new(0x11D6A, 0x11D8E),
    Interval::new(0x11D90, 0x11D91),
    Interval::new(0x11D93, 0x11D98),
    Interval::new(0x11DA0, 0x11DA9),
];

const GURMUKHI: [Interval; 16] = [
    Interval::new(0x0A01, 0x0A03),
    Interval::new(0x0A05, 0x0A0A),
    Interval::new(0x0A0F, 0x0A10),
    Interval::new(0x0A13, 0x0A28),
    Interval::new(0x0A2A, 0x0A30),
    Interval::new(0x0A32, 0x0A33),
    Interval::new(0x0A35, 0x0A36),
    Interval::new(0x0A38, 0x0A39),
    Interval::new(0x0A3C, 0x0A3C),
    Interval::new(0x0A3E, 0x0A42),
    Interval::new(0x0A47, 0x0A48),
    Interval::new(0x0A4B, 0x0A4D),
    Interval::new(0x0A51, 0x0A51),
    Interval::new(0x0A59, 0x0A5C),
    Interval::new(0x0A5E, 0x0A5E),
    Interval::new(0x0A66, 0x0A76),
];

const HANIFI_ROHINGYA: [Interval; 2] = [
    Interval::new(0x10D00, 0x10D27),
    Interval::new(0x10D30, 0x10D39),
];

const HEBREW: [Interval; 9] = [
    Interval::new(0x0591, 0x05C7),
    Interval::new(0x05D0, 0x05EA),
    Interval::new(0x05EF, 0x05F4),
    Interval::new(0xFB1D, 0xFB36),
    Interval::new(0xFB38, 0xFB3C),
    Interval::new(0xFB3E, 0xFB3E),
    Interval::new(0xFB40, 0xFB41),
    Interval::new(0xFB43, 0xFB44),
    Interval::new(0xFB46, 0xFB4F),
];

const MAKASAR: [Interval; 1] = [
    Interval::new(0x11EE0, 0x11EF8),
];

const MEDEFAIDRIN: [Interval; 1] = [
    Interval::new(0x16E40, 0x16E9A),
];

const OGHAM: [Interval; 1] = [
    Interval::new(0x1680, 0x169C),
];

const OLD_SOGDIAN: [Interval; 1] = [
    Interval::new(0x10F00, 0x10F27),
];

const OSAGE: [Interval; 2] = [
    Interval::new(0x104B0, 0x104D3),
    Interval::new(0x104D8, 0x104FB),
];

const RUNIC: [Interval; 2] = [
    Interval::new(0x16A0, 0x16EA),
    Interval::new(0x16EE, 0x16F8),
];

const SOGDIAN: [Interval; 1] = [
    Interval::new(0x10F30, 0x10F59),
];

const THAANA: [Interval; 1] = [
    Interval::new(0x0780, 0x07B1),
];

const THAI: [Interval; 2] = [
    Interval::new(0x0E01, 0x0E3A),
    Interval::new(0x0E40, 0x0E5B),
];

const TIFINAGH: [Interval; 3] = [
    Interval::new(0x2D30, 0x2D67),
    Interval::new(0x2D6F, 0x2D70),
    Interval::new(0x2D7F, 0x2D7F),
];

const UGARITIC: [Interval; 2] = [
    Interval::new(0x10380, 0x1039D),
    Interval::new(0x1039F, 0x1039F),
];

const YI: [Interval; 2] = [
    Interval::new(0xA000, 0xA48C),
    Interval::new(0xA490, 0xA4C6),
];

pub(crate) const SCRIPTS: [ScriptData; 23] = [
    ScriptData { names: &["Armenian", "Armn"], ranges: &ARMENIAN },
    ScriptData { names: &["Braille", "Brai"], ranges: &BRAILLE },
    ScriptData { names: &["Cherokee", "Cher"], ranges: &CHEROKEE },
    ScriptData { names: &["Deseret", "Dsrt"], ranges: &DESERET },
    ScriptData { names: &["Dogra", "Dogr"], ranges: &DOGRA },
    ScriptData { names: &["Georgian", "Geor"], ranges: &GEORGIAN },
    ScriptData { names: &["Gothic", "Goth"], ranges: &GOTHIC },
    ScriptData { names: &["Gunjala_Gondi", "Gong"], ranges: &GUNJALA_GONDI },
    ScriptData { names: &["Gurmukhi", "Guru"], ranges: &GURMUKHI },
    ScriptData { names: &["Hanifi_Rohingya", "Rohg"], ranges: &HANIFI_ROHINGYA },
    ScriptData { names: &["Hebrew", "Hebr"], ranges: &HEBREW },
    ScriptData { names: &["Makasar", "Maka"], ranges: &MAKASAR },
    ScriptData { names: &["Medefaidrin", "Medf"], ranges: &MEDEFAIDRIN },
    ScriptData { names: &["Ogham", "Ogam"], ranges: &OGHAM },
    ScriptData { names: &["Old_Sogdian", "Sogo"], ranges: &OLD_SOGDIAN },
    ScriptData { names: &["Osage", "Osge"], ranges: &OSAGE },
    ScriptData { names: &["Runic", "Runr"], ranges: &RUNIC },
    ScriptData { names: &["Sogdian", "Sogd"], ranges: &SOGDIAN },
    ScriptData { names: &["Thaana", "Thaa"], ranges: &THAANA },
    ScriptData { names: &["Thai"], ranges: &THAI },
    ScriptData { names: &["Tifinagh", "Tfng"], ranges: &TIFINAGH },
    ScriptData { names: &["Ugaritic", "Ugar"], ranges: &UGARITIC },
    ScriptData { names: &["Yi", "Yiii"], ranges: &YI },
];
