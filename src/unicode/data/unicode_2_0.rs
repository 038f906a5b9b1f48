//! Unicode 2.0 property tables.
//!
//! Generated from UCD 14.0 data restricted to the code points present in
//! Unicode 2.0. Do not edit by hand.

use super::UnicodeData;

pub(crate) static UNICODE_2_0: UnicodeData = UnicodeData {
    version: "2.0",
    maximum_code_point: 0x10FFFF,
    property_values: &[
        "lu",
        "ll",
        "lt",
        "lm",
        "lo",
        "mn",
        "mc",
        "me",
        "nd",
        "nl",
        "no",
        "pc",
        "pd",
        "ps",
        "pe",
        "pi",
        "pf",
        "po",
        "sm",
        "sc",
        "sk",
        "so",
        "zs",
        "zl",
        "zp",
        "cc",
        "cf",
        "cs",
        "co",
        "cn",
        "lc",
        "arabic",
        "armenian",
        "bengali",
        "bopomofo",
        "coptic",
        "cyrillic",
        "devanagari",
        "georgian",
        "greek",
        "gujarati",
        "gurmukhi",
        "hangul",
        "han",
        "hebrew",
        "hiragana",
        "katakana",
        "kannada",
        "lao",
        "latin",
        "malayalam",
        "oriya",
        "tamil",
        "telugu",
        "thai",
        "tibetan",
        "inherited",
        "common",
        "alphabetic",
        "lowercase",
        "uppercase",
        "whitespace",
    ],
    intervals: &[
        // lu
        &[
            0x0041, 0x005A, 0x00C0, 0x00D6, 0x00D8, 0x00DE, 0x0100, 0x0100, 0x0102, 0x0102, 0x0104, 0x0104,
            0x0106, 0x0106, 0x0108, 0x0108, 0x010A, 0x010A, 0x010C, 0x010C, 0x010E, 0x010E, 0x0110, 0x0110,
            0x0112, 0x0112, 0x0114, 0x0114, 0x0116, 0x0116, 0x0118, 0x0118, 0x011A, 0x011A, 0x011C, 0x011C,
            0x011E, 0x011E, 0x0120, 0x0120, 0x0122, 0x0122, 0x0124, 0x0124, 0x0126, 0x0126, 0x0128, 0x0128,
            0x012A, 0x012A, 0x012C, 0x012C, 0x012E, 0x012E, 0x0130, 0x0130, 0x0132, 0x0132, 0x0134, 0x0134,
            0x0136, 0x0136, 0x0139, 0x0139, 0x013B, 0x013B, 0x013D, 0x013D, 0x013F, 0x013F, 0x0141, 0x0141,
            0x0143, 0x0143, 0x0145, 0x0145, 0x0147, 0x0147, 0x014A, 0x014A, 0x014C, 0x014C, 0x014E, 0x014E,
            0x0150, 0x0150, 0x0152, 0x0152, 0x0154, 0x0154, 0x0156, 0x0156, 0x0158, 0x0158, 0x015A, 0x015A,
            0x015C, 0x015C, 0x015E, 0x015E, 0x0160, 0x0160, 0x0162, 0x0162, 0x0164, 0x0164, 0x0166, 0x0166,
            0x0168, 0x0168, 0x016A, 0x016A, 0x016C, 0x016C, 0x016E, 0x016E, 0x0170, 0x0170, 0x0172, 0x0172,
            0x0174, 0x0174, 0x0176, 0x0176, 0x0178, 0x0179, 0x017B, 0x017B, 0x017D, 0x017D, 0x0181, 0x0182,
            0x0184, 0x0184, 0x0186, 0x0187, 0x0189, 0x018B, 0x018E, 0x0191, 0x0193, 0x0194, 0x0196, 0x0198,
            0x019C, 0x019D, 0x019F, 0x01A0, 0x01A2, 0x01A2, 0x01A4, 0x01A4, 0x01A6, 0x01A7, 0x01A9, 0x01A9,
            0x01AC, 0x01AC, 0x01AE, 0x01AF, 0x01B1, 0x01B3, 0x01B5, 0x01B5, 0x01B7, 0x01B8, 0x01BC, 0x01BC,
            0x01C4, 0x01C4, 0x01C7, 0x01C7, 0x01CA, 0x01CA, 0x01CD, 0x01CD, 0x01CF, 0x01CF, 0x01D1, 0x01D1,
            0x01D3, 0x01D3, 0x01D5, 0x01D5, 0x01D7, 0x01D7, 0x01D9, 0x01D9, 0x01DB, 0x01DB, 0x01DE, 0x01DE,
            0x01E0, 0x01E0, 0x01E2, 0x01E2, 0x01E4, 0x01E4, 0x01E6, 0x01E6, 0x01E8, 0x01E8, 0x01EA, 0x01EA,
            0x01EC, 0x01EC, 0x01EE, 0x01EE, 0x01F1, 0x01F1, 0x01F4, 0x01F4, 0x01FA, 0x01FA, 0x01FC, 0x01FC,
            0x01FE, 0x01FE, 0x0200, 0x0200, 0x0202, 0x0202, 0x0204, 0x0204, 0x0206, 0x0206, 0x0208, 0x0208,
            0x020A, 0x020A, 0x020C, 0x020C, 0x020E, 0x020E, 0x0210, 0x0210, 0x0212, 0x0212, 0x0214, 0x0214,
            0x0216, 0x0216, 0x0386, 0x0386, 0x0388, 0x038A, 0x038C, 0x038C, 0x038E, 0x038F, 0x0391, 0x03A1,
            0x03A3, 0x03AB, 0x03D2, 0x03D4, 0x03DA, 0x03DA, 0x03DC, 0x03DC, 0x03DE, 0x03DE, 0x03E0, 0x03E0,
            0x03E2, 0x03E2, 0x03E4, 0x03E4, 0x03E6, 0x03E6, 0x03E8, 0x03E8, 0x03EA, 0x03EA, 0x03EC, 0x03EC,
            0x03EE, 0x03EE, 0x0401, 0x040C, 0x040E, 0x042F, 0x0460, 0x0460, 0x0462, 0x0462, 0x0464, 0x0464,
            0x0466, 0x0466, 0x0468, 0x0468, 0x046A, 0x046A, 0x046C, 0x046C, 0x046E, 0x046E, 0x0470, 0x0470,
            0x0472, 0x0472, 0x0474, 0x0474, 0x0476, 0x0476, 0x0478, 0x0478, 0x047A, 0x047A, 0x047C, 0x047C,
            0x047E, 0x047E, 0x0480, 0x0480, 0x0490, 0x0490, 0x0492, 0x0492, 0x0494, 0x0494, 0x0496, 0x0496,
            0x0498, 0x0498, 0x049A, 0x049A, 0x049C, 0x049C, 0x049E, 0x049E, 0x04A0, 0x04A0, 0x04A2, 0x04A2,
            0x04A4, 0x04A4, 0x04A6, 0x04A6, 0x04A8, 0x04A8, 0x04AA, 0x04AA, 0x04AC, 0x04AC, 0x04AE, 0x04AE,
            0x04B0, 0x04B0, 0x04B2, 0x04B2, 0x04B4, 0x04B4, 0x04B6, 0x04B6, 0x04B8, 0x04B8, 0x04BA, 0x04BA,
            0x04BC, 0x04BC, 0x04BE, 0x04BE, 0x04C0, 0x04C1, 0x04C3, 0x04C3, 0x04C7, 0x04C7, 0x04CB, 0x04CB,
            0x04D0, 0x04D0, 0x04D2, 0x04D2, 0x04D4, 0x04D4, 0x04D6, 0x04D6, 0x04D8, 0x04D8, 0x04DA, 0x04DA,
            0x04DC, 0x04DC, 0x04DE, 0x04DE, 0x04E0, 0x04E0, 0x04E2, 0x04E2, 0x04E4, 0x04E4, 0x04E6, 0x04E6,
            0x04E8, 0x04E8, 0x04EA, 0x04EA, 0x04EE, 0x04EE, 0x04F0, 0x04F0, 0x04F2, 0x04F2, 0x04F4, 0x04F4,
            0x04F8, 0x04F8, 0x0531, 0x0556, 0x10A0, 0x10C5, 0x1E00, 0x1E00, 0x1E02, 0x1E02, 0x1E04, 0x1E04,
            0x1E06, 0x1E06, 0x1E08, 0x1E08, 0x1E0A, 0x1E0A, 0x1E0C, 0x1E0C, 0x1E0E, 0x1E0E, 0x1E10, 0x1E10,
            0x1E12, 0x1E12, 0x1E14, 0x1E14, 0x1E16, 0x1E16, 0x1E18, 0x1E18, 0x1E1A, 0x1E1A, 0x1E1C, 0x1E1C,
            0x1E1E, 0x1E1E, 0x1E20, 0x1E20, 0x1E22, 0x1E22, 0x1E24, 0x1E24, 0x1E26, 0x1E26, 0x1E28, 0x1E28,
            0x1E2A, 0x1E2A, 0x1E2C, 0x1E2C, 0x1E2E, 0x1E2E, 0x1E30, 0x1E30, 0x1E32, 0x1E32, 0x1E34, 0x1E34,
            0x1E36, 0x1E36, 0x1E38, 0x1E38, 0x1E3A, 0x1E3A, 0x1E3C, 0x1E3C, 0x1E3E, 0x1E3E, 0x1E40, 0x1E40,
            0x1E42, 0x1E42, 0x1E44, 0x1E44, 0x1E46, 0x1E46, 0x1E48, 0x1E48, 0x1E4A, 0x1E4A, 0x1E4C, 0x1E4C,
            0x1E4E, 0x1E4E, 0x1E50, 0x1E50, 0x1E52, 0x1E52, 0x1E54, 0x1E54, 0x1E56, 0x1E56, 0x1E58, 0x1E58,
            0x1E5A, 0x1E5A, 0x1E5C, 0x1E5C, 0x1E5E, 0x1E5E, 0x1E60, 0x1E60, 0x1E62, 0x1E62, 0x1E64, 0x1E64,
            0x1E66, 0x1E66, 0x1E68, 0x1E68, 0x1E6A, 0x1E6A, 0x1E6C, 0x1E6C, 0x1E6E, 0x1E6E, 0x1E70, 0x1E70,
            0x1E72, 0x1E72, 0x1E74, 0x1E74, 0x1E76, 0x1E76, 0x1E78, 0x1E78, 0x1E7A, 0x1E7A, 0x1E7C, 0x1E7C,
            0x1E7E, 0x1E7E, 0x1E80, 0x1E80, 0x1E82, 0x1E82, 0x1E84, 0x1E84, 0x1E86, 0x1E86, 0x1E88, 0x1E88,
            0x1E8A, 0x1E8A, 0x1E8C, 0x1E8C, 0x1E8E, 0x1E8E, 0x1E90, 0x1E90, 0x1E92, 0x1E92, 0x1E94, 0x1E94,
            0x1EA0, 0x1EA0, 0x1EA2, 0x1EA2, 0x1EA4, 0x1EA4, 0x1EA6, 0x1EA6, 0x1EA8, 0x1EA8, 0x1EAA, 0x1EAA,
            0x1EAC, 0x1EAC, 0x1EAE, 0x1EAE, 0x1EB0, 0x1EB0, 0x1EB2, 0x1EB2, 0x1EB4, 0x1EB4, 0x1EB6, 0x1EB6,
            0x1EB8, 0x1EB8, 0x1EBA, 0x1EBA, 0x1EBC, 0x1EBC, 0x1EBE, 0x1EBE, 0x1EC0, 0x1EC0, 0x1EC2, 0x1EC2,
            0x1EC4, 0x1EC4, 0x1EC6, 0x1EC6, 0x1EC8, 0x1EC8, 0x1ECA, 0x1ECA, 0x1ECC, 0x1ECC, 0x1ECE, 0x1ECE,
            0x1ED0, 0x1ED0, 0x1ED2, 0x1ED2, 0x1ED4, 0x1ED4, 0x1ED6, 0x1ED6, 0x1ED8, 0x1ED8, 0x1EDA, 0x1EDA,
            0x1EDC, 0x1EDC, 0x1EDE, 0x1EDE, 0x1EE0, 0x1EE0, 0x1EE2, 0x1EE2, 0x1EE4, 0x1EE4, 0x1EE6, 0x1EE6,
            0x1EE8, 0x1EE8, 0x1EEA, 0x1EEA, 0x1EEC, 0x1EEC, 0x1EEE, 0x1EEE, 0x1EF0, 0x1EF0, 0x1EF2, 0x1EF2,
            0x1EF4, 0x1EF4, 0x1EF6, 0x1EF6, 0x1EF8, 0x1EF8, 0x1F08, 0x1F0F, 0x1F18, 0x1F1D, 0x1F28, 0x1F2F,
            0x1F38, 0x1F3F, 0x1F48, 0x1F4D, 0x1F59, 0x1F59, 0x1F5B, 0x1F5B, 0x1F5D, 0x1F5D, 0x1F5F, 0x1F5F,
            0x1F68, 0x1F6F, 0x1FB8, 0x1FBB, 0x1FC8, 0x1FCB, 0x1FD8, 0x1FDB, 0x1FE8, 0x1FEC, 0x1FF8, 0x1FFB,
            0x2102, 0x2102, 0x2107, 0x2107, 0x210B, 0x210D, 0x2110, 0x2112, 0x2115, 0x2115, 0x2119, 0x211D,
            0x2124, 0x2124, 0x2126, 0x2126, 0x2128, 0x2128, 0x212A, 0x212D, 0x2130, 0x2133, 0xFF21, 0xFF3A,
        ],
        // ll
        &[
            0x0061, 0x007A, 0x00B5, 0x00B5, 0x00DF, 0x00F6, 0x00F8, 0x00FF, 0x0101, 0x0101, 0x0103, 0x0103,
            0x0105, 0x0105, 0x0107, 0x0107, 0x0109, 0x0109, 0x010B, 0x010B, 0x010D, 0x010D, 0x010F, 0x010F,
            0x0111, 0x0111, 0x0113, 0x0113, 0x0115, 0x0115, 0x0117, 0x0117, 0x0119, 0x0119, 0x011B, 0x011B,
            0x011D, 0x011D, 0x011F, 0x011F, 0x0121, 0x0121, 0x0123, 0x0123, 0x0125, 0x0125, 0x0127, 0x0127,
            0x0129, 0x0129, 0x012B, 0x012B, 0x012D, 0x012D, 0x012F, 0x012F, 0x0131, 0x0131, 0x0133, 0x0133,
            0x0135, 0x0135, 0x0137, 0x0138, 0x013A, 0x013A, 0x013C, 0x013C, 0x013E, 0x013E, 0x0140, 0x0140,
            0x0142, 0x0142, 0x0144, 0x0144, 0x0146, 0x0146, 0x0148, 0x0149, 0x014B, 0x014B, 0x014D, 0x014D,
            0x014F, 0x014F, 0x0151, 0x0151, 0x0153, 0x0153, 0x0155, 0x0155, 0x0157, 0x0157, 0x0159, 0x0159,
            0x015B, 0x015B, 0x015D, 0x015D, 0x015F, 0x015F, 0x0161, 0x0161, 0x0163, 0x0163, 0x0165, 0x0165,
            0x0167, 0x0167, 0x0169, 0x0169, 0x016B, 0x016B, 0x016D, 0x016D, 0x016F, 0x016F, 0x0171, 0x0171,
            0x0173, 0x0173, 0x0175, 0x0175, 0x0177, 0x0177, 0x017A, 0x017A, 0x017C, 0x017C, 0x017E, 0x0180,
            0x0183, 0x0183, 0x0185, 0x0185, 0x0188, 0x0188, 0x018C, 0x018D, 0x0192, 0x0192, 0x0195, 0x0195,
            0x0199, 0x019B, 0x019E, 0x019E, 0x01A1, 0x01A1, 0x01A3, 0x01A3, 0x01A5, 0x01A5, 0x01A8, 0x01A8,
            0x01AA, 0x01AB, 0x01AD, 0x01AD, 0x01B0, 0x01B0, 0x01B4, 0x01B4, 0x01B6, 0x01B6, 0x01B9, 0x01BA,
            0x01BD, 0x01BF, 0x01C6, 0x01C6, 0x01C9, 0x01C9, 0x01CC, 0x01CC, 0x01CE, 0x01CE, 0x01D0, 0x01D0,
            0x01D2, 0x01D2, 0x01D4, 0x01D4, 0x01D6, 0x01D6, 0x01D8, 0x01D8, 0x01DA, 0x01DA, 0x01DC, 0x01DD,
            0x01DF, 0x01DF, 0x01E1, 0x01E1, 0x01E3, 0x01E3, 0x01E5, 0x01E5, 0x01E7, 0x01E7, 0x01E9, 0x01E9,
            0x01EB, 0x01EB, 0x01ED, 0x01ED, 0x01EF, 0x01F0, 0x01F3, 0x01F3, 0x01F5, 0x01F5, 0x01FB, 0x01FB,
            0x01FD, 0x01FD, 0x01FF, 0x01FF, 0x0201, 0x0201, 0x0203, 0x0203, 0x0205, 0x0205, 0x0207, 0x0207,
            0x0209, 0x0209, 0x020B, 0x020B, 0x020D, 0x020D, 0x020F, 0x020F, 0x0211, 0x0211, 0x0213, 0x0213,
            0x0215, 0x0215, 0x0217, 0x0217, 0x0250, 0x0293, 0x0295, 0x02A8, 0x0390, 0x0390, 0x03AC, 0x03CE,
            0x03D0, 0x03D1, 0x03D5, 0x03D6, 0x03E3, 0x03E3, 0x03E5, 0x03E5, 0x03E7, 0x03E7, 0x03E9, 0x03E9,
            0x03EB, 0x03EB, 0x03ED, 0x03ED, 0x03EF, 0x03F3, 0x0430, 0x044F, 0x0451, 0x045C, 0x045E, 0x045F,
            0x0461, 0x0461, 0x0463, 0x0463, 0x0465, 0x0465, 0x0467, 0x0467, 0x0469, 0x0469, 0x046B, 0x046B,
            0x046D, 0x046D, 0x046F, 0x046F, 0x0471, 0x0471, 0x0473, 0x0473, 0x0475, 0x0475, 0x0477, 0x0477,
            0x0479, 0x0479, 0x047B, 0x047B, 0x047D, 0x047D, 0x047F, 0x047F, 0x0481, 0x0481, 0x0491, 0x0491,
            0x0493, 0x0493, 0x0495, 0x0495, 0x0497, 0x0497, 0x0499, 0x0499, 0x049B, 0x049B, 0x049D, 0x049D,
            0x049F, 0x049F, 0x04A1, 0x04A1, 0x04A3, 0x04A3, 0x04A5, 0x04A5, 0x04A7, 0x04A7, 0x04A9, 0x04A9,
            0x04AB, 0x04AB, 0x04AD, 0x04AD, 0x04AF, 0x04AF, 0x04B1, 0x04B1, 0x04B3, 0x04B3, 0x04B5, 0x04B5,
            0x04B7, 0x04B7, 0x04B9, 0x04B9, 0x04BB, 0x04BB, 0x04BD, 0x04BD, 0x04BF, 0x04BF, 0x04C2, 0x04C2,
            0x04C4, 0x04C4, 0x04C8, 0x04C8, 0x04CC, 0x04CC, 0x04D1, 0x04D1, 0x04D3, 0x04D3, 0x04D5, 0x04D5,
            0x04D7, 0x04D7, 0x04D9, 0x04D9, 0x04DB, 0x04DB, 0x04DD, 0x04DD, 0x04DF, 0x04DF, 0x04E1, 0x04E1,
            0x04E3, 0x04E3, 0x04E5, 0x04E5, 0x04E7, 0x04E7, 0x04E9, 0x04E9, 0x04EB, 0x04EB, 0x04EF, 0x04EF,
            0x04F1, 0x04F1, 0x04F3, 0x04F3, 0x04F5, 0x04F5, 0x04F9, 0x04F9, 0x0561, 0x0587, 0x10D0, 0x10F6,
            0x1E01, 0x1E01, 0x1E03, 0x1E03, 0x1E05, 0x1E05, 0x1E07, 0x1E07, 0x1E09, 0x1E09, 0x1E0B, 0x1E0B,
            0x1E0D, 0x1E0D, 0x1E0F, 0x1E0F, 0x1E11, 0x1E11, 0x1E13, 0x1E13, 0x1E15, 0x1E15, 0x1E17, 0x1E17,
            0x1E19, 0x1E19, 0x1E1B, 0x1E1B, 0x1E1D, 0x1E1D, 0x1E1F, 0x1E1F, 0x1E21, 0x1E21, 0x1E23, 0x1E23,
            0x1E25, 0x1E25, 0x1E27, 0x1E27, 0x1E29, 0x1E29, 0x1E2B, 0x1E2B, 0x1E2D, 0x1E2D, 0x1E2F, 0x1E2F,
            0x1E31, 0x1E31, 0x1E33, 0x1E33, 0x1E35, 0x1E35, 0x1E37, 0x1E37, 0x1E39, 0x1E39, 0x1E3B, 0x1E3B,
            0x1E3D, 0x1E3D, 0x1E3F, 0x1E3F, 0x1E41, 0x1E41, 0x1E43, 0x1E43, 0x1E45, 0x1E45, 0x1E47, 0x1E47,
            0x1E49, 0x1E49, 0x1E4B, 0x1E4B, 0x1E4D, 0x1E4D, 0x1E4F, 0x1E4F, 0x1E51, 0x1E51, 0x1E53, 0x1E53,
            0x1E55, 0x1E55, 0x1E57, 0x1E57, 0x1E59, 0x1E59, 0x1E5B, 0x1E5B, 0x1E5D, 0x1E5D, 0x1E5F, 0x1E5F,
            0x1E61, 0x1E61, 0x1E63, 0x1E63, 0x1E65, 0x1E65, 0x1E67, 0x1E67, 0x1E69, 0x1E69, 0x1E6B, 0x1E6B,
            0x1E6D, 0x1E6D, 0x1E6F, 0x1E6F, 0x1E71, 0x1E71, 0x1E73, 0x1E73, 0x1E75, 0x1E75, 0x1E77, 0x1E77,
            0x1E79, 0x1E79, 0x1E7B, 0x1E7B, 0x1E7D, 0x1E7D, 0x1E7F, 0x1E7F, 0x1E81, 0x1E81, 0x1E83, 0x1E83,
            0x1E85, 0x1E85, 0x1E87, 0x1E87, 0x1E89, 0x1E89, 0x1E8B, 0x1E8B, 0x1E8D, 0x1E8D, 0x1E8F, 0x1E8F,
            0x1E91, 0x1E91, 0x1E93, 0x1E93, 0x1E95, 0x1E9B, 0x1EA1, 0x1EA1, 0x1EA3, 0x1EA3, 0x1EA5, 0x1EA5,
            0x1EA7, 0x1EA7, 0x1EA9, 0x1EA9, 0x1EAB, 0x1EAB, 0x1EAD, 0x1EAD, 0x1EAF, 0x1EAF, 0x1EB1, 0x1EB1,
            0x1EB3, 0x1EB3, 0x1EB5, 0x1EB5, 0x1EB7, 0x1EB7, 0x1EB9, 0x1EB9, 0x1EBB, 0x1EBB, 0x1EBD, 0x1EBD,
            0x1EBF, 0x1EBF, 0x1EC1, 0x1EC1, 0x1EC3, 0x1EC3, 0x1EC5, 0x1EC5, 0x1EC7, 0x1EC7, 0x1EC9, 0x1EC9,
            0x1ECB, 0x1ECB, 0x1ECD, 0x1ECD, 0x1ECF, 0x1ECF, 0x1ED1, 0x1ED1, 0x1ED3, 0x1ED3, 0x1ED5, 0x1ED5,
            0x1ED7, 0x1ED7, 0x1ED9, 0x1ED9, 0x1EDB, 0x1EDB, 0x1EDD, 0x1EDD, 0x1EDF, 0x1EDF, 0x1EE1, 0x1EE1,
            0x1EE3, 0x1EE3, 0x1EE5, 0x1EE5, 0x1EE7, 0x1EE7, 0x1EE9, 0x1EE9, 0x1EEB, 0x1EEB, 0x1EED, 0x1EED,
            0x1EEF, 0x1EEF, 0x1EF1, 0x1EF1, 0x1EF3, 0x1EF3, 0x1EF5, 0x1EF5, 0x1EF7, 0x1EF7, 0x1EF9, 0x1EF9,
            0x1F00, 0x1F07, 0x1F10, 0x1F15, 0x1F20, 0x1F27, 0x1F30, 0x1F37, 0x1F40, 0x1F45, 0x1F50, 0x1F57,
            0x1F60, 0x1F67, 0x1F70, 0x1F7D, 0x1F80, 0x1F87, 0x1F90, 0x1F97, 0x1FA0, 0x1FA7, 0x1FB0, 0x1FB4,
            0x1FB6, 0x1FB7, 0x1FBE, 0x1FBE, 0x1FC2, 0x1FC4, 0x1FC6, 0x1FC7, 0x1FD0, 0x1FD3, 0x1FD6, 0x1FD7,
            0x1FE0, 0x1FE7, 0x1FF2, 0x1FF4, 0x1FF6, 0x1FF7, 0x210A, 0x210A, 0x210E, 0x210F, 0x2113, 0x2113,
            0x212F, 0x212F, 0x2134, 0x2134, 0xFB00, 0xFB06, 0xFB13, 0xFB17, 0xFF41, 0xFF5A,
        ],
        // lt
        &[
            0x01C5, 0x01C5, 0x01C8, 0x01C8, 0x01CB, 0x01CB, 0x01F2, 0x01F2, 0x1F88, 0x1F8F, 0x1F98, 0x1F9F,
            0x1FA8, 0x1FAF, 0x1FBC, 0x1FBC, 0x1FCC, 0x1FCC, 0x1FFC, 0x1FFC,
        ],
        // lm
        &[
            0x02B0, 0x02C1, 0x02C6, 0x02D1, 0x02E0, 0x02E4, 0x0374, 0x0374, 0x037A, 0x037A, 0x0559, 0x0559,
            0x0640, 0x0640, 0x06E5, 0x06E6, 0x0E46, 0x0E46, 0x0EC6, 0x0EC6, 0x207F, 0x207F, 0x3005, 0x3005,
            0x3031, 0x3035, 0x309D, 0x309E, 0x30FC, 0x30FE, 0xFF70, 0xFF70, 0xFF9E, 0xFF9F,
        ],
        // lo
        &[
            0x00AA, 0x00AA, 0x00BA, 0x00BA, 0x01BB, 0x01BB, 0x01C0, 0x01C3, 0x0294, 0x0294, 0x05D0, 0x05EA,
            0x05F0, 0x05F2, 0x0621, 0x063A, 0x0641, 0x064A, 0x0671, 0x06B7, 0x06BA, 0x06BE, 0x06C0, 0x06CE,
            0x06D0, 0x06D3, 0x06D5, 0x06D5, 0x0905, 0x0939, 0x093D, 0x093D, 0x0950, 0x0950, 0x0958, 0x0961,
            0x0985, 0x098C, 0x098F, 0x0990, 0x0993, 0x09A8, 0x09AA, 0x09B0, 0x09B2, 0x09B2, 0x09B6, 0x09B9,
            0x09DC, 0x09DD, 0x09DF, 0x09E1, 0x09F0, 0x09F1, 0x0A05, 0x0A0A, 0x0A0F, 0x0A10, 0x0A13, 0x0A28,
            0x0A2A, 0x0A30, 0x0A32, 0x0A33, 0x0A35, 0x0A36, 0x0A38, 0x0A39, 0x0A59, 0x0A5C, 0x0A5E, 0x0A5E,
            0x0A72, 0x0A74, 0x0A85, 0x0A8B, 0x0A8D, 0x0A8D, 0x0A8F, 0x0A91, 0x0A93, 0x0AA8, 0x0AAA, 0x0AB0,
            0x0AB2, 0x0AB3, 0x0AB5, 0x0AB9, 0x0ABD, 0x0ABD, 0x0AD0, 0x0AD0, 0x0AE0, 0x0AE0, 0x0B05, 0x0B0C,
            0x0B0F, 0x0B10, 0x0B13, 0x0B28, 0x0B2A, 0x0B30, 0x0B32, 0x0B33, 0x0B36, 0x0B39, 0x0B3D, 0x0B3D,
            0x0B5C, 0x0B5D, 0x0B5F, 0x0B61, 0x0B83, 0x0B83, 0x0B85, 0x0B8A, 0x0B8E, 0x0B90, 0x0B92, 0x0B95,
            0x0B99, 0x0B9A, 0x0B9C, 0x0B9C, 0x0B9E, 0x0B9F, 0x0BA3, 0x0BA4, 0x0BA8, 0x0BAA, 0x0BAE, 0x0BB5,
            0x0BB7, 0x0BB9, 0x0C05, 0x0C0C, 0x0C0E, 0x0C10, 0x0C12, 0x0C28, 0x0C2A, 0x0C33, 0x0C35, 0x0C39,
            0x0C60, 0x0C61, 0x0C85, 0x0C8C, 0x0C8E, 0x0C90, 0x0C92, 0x0CA8, 0x0CAA, 0x0CB3, 0x0CB5, 0x0CB9,
            0x0CDE, 0x0CDE, 0x0CE0, 0x0CE1, 0x0D05, 0x0D0C, 0x0D0E, 0x0D10, 0x0D12, 0x0D28, 0x0D2A, 0x0D39,
            0x0D60, 0x0D61, 0x0E01, 0x0E30, 0x0E32, 0x0E33, 0x0E40, 0x0E45, 0x0E81, 0x0E82, 0x0E84, 0x0E84,
            0x0E87, 0x0E88, 0x0E8A, 0x0E8A, 0x0E8D, 0x0E8D, 0x0E94, 0x0E97, 0x0E99, 0x0E9F, 0x0EA1, 0x0EA3,
            0x0EA5, 0x0EA5, 0x0EA7, 0x0EA7, 0x0EAA, 0x0EAB, 0x0EAD, 0x0EB0, 0x0EB2, 0x0EB3, 0x0EBD, 0x0EBD,
            0x0EC0, 0x0EC4, 0x0EDC, 0x0EDD, 0x0F00, 0x0F00, 0x0F40, 0x0F47, 0x0F49, 0x0F69, 0x0F88, 0x0F8B,
            0x1100, 0x1159, 0x115F, 0x11A2, 0x11A8, 0x11F9, 0x2135, 0x2138, 0x3006, 0x3006, 0x3041, 0x3094,
            0x30A1, 0x30FA, 0x3105, 0x312C, 0x3131, 0x318E, 0x4E00, 0x9FA5, 0xAC00, 0xD7A3, 0xF900, 0xFA2D,
            0xFB1F, 0xFB28, 0xFB2A, 0xFB36, 0xFB38, 0xFB3C, 0xFB3E, 0xFB3E, 0xFB40, 0xFB41, 0xFB43, 0xFB44,
            0xFB46, 0xFBB1, 0xFBD3, 0xFD3D, 0xFD50, 0xFD8F, 0xFD92, 0xFDC7, 0xFDF0, 0xFDFB, 0xFE70, 0xFE72,
            0xFE74, 0xFE74, 0xFE76, 0xFEFC, 0xFF66, 0xFF6F, 0xFF71, 0xFF9D, 0xFFA0, 0xFFBE, 0xFFC2, 0xFFC7,
            0xFFCA, 0xFFCF, 0xFFD2, 0xFFD7, 0xFFDA, 0xFFDC,
        ],
        // mn
        &[
            0x0300, 0x0345, 0x0360, 0x0361, 0x0483, 0x0486, 0x0591, 0x05A1, 0x05A3, 0x05B9, 0x05BB, 0x05BD,
            0x05BF, 0x05BF, 0x05C1, 0x05C2, 0x05C4, 0x05C4, 0x064B, 0x0652, 0x0670, 0x0670, 0x06D6, 0x06DC,
            0x06DF, 0x06E4, 0x06E7, 0x06E8, 0x06EA, 0x06ED, 0x0901, 0x0902, 0x093C, 0x093C, 0x0941, 0x0948,
            0x094D, 0x094D, 0x0951, 0x0954, 0x0962, 0x0963, 0x0981, 0x0981, 0x09BC, 0x09BC, 0x09C1, 0x09C4,
            0x09CD, 0x09CD, 0x09E2, 0x09E3, 0x0A02, 0x0A02, 0x0A3C, 0x0A3C, 0x0A41, 0x0A42, 0x0A47, 0x0A48,
            0x0A4B, 0x0A4D, 0x0A70, 0x0A71, 0x0A81, 0x0A82, 0x0ABC, 0x0ABC, 0x0AC1, 0x0AC5, 0x0AC7, 0x0AC8,
            0x0ACD, 0x0ACD, 0x0B01, 0x0B01, 0x0B3C, 0x0B3C, 0x0B3F, 0x0B3F, 0x0B41, 0x0B43, 0x0B4D, 0x0B4D,
            0x0B56, 0x0B56, 0x0B82, 0x0B82, 0x0BC0, 0x0BC0, 0x0BCD, 0x0BCD, 0x0C3E, 0x0C40, 0x0C46, 0x0C48,
            0x0C4A, 0x0C4D, 0x0C55, 0x0C56, 0x0CBF, 0x0CBF, 0x0CC6, 0x0CC6, 0x0CCC, 0x0CCD, 0x0D41, 0x0D43,
            0x0D4D, 0x0D4D, 0x0E31, 0x0E31, 0x0E34, 0x0E3A, 0x0E47, 0x0E4E, 0x0EB1, 0x0EB1, 0x0EB4, 0x0EB9,
            0x0EBB, 0x0EBC, 0x0EC8, 0x0ECD, 0x0F18, 0x0F19, 0x0F35, 0x0F35, 0x0F37, 0x0F37, 0x0F39, 0x0F39,
            0x0F71, 0x0F7E, 0x0F80, 0x0F84, 0x0F86, 0x0F87, 0x0F90, 0x0F95, 0x0F97, 0x0F97, 0x0F99, 0x0FAD,
            0x0FB1, 0x0FB7, 0x0FB9, 0x0FB9, 0x20D0, 0x20DC, 0x20E1, 0x20E1, 0x302A, 0x302D, 0x3099, 0x309A,
            0xFB1E, 0xFB1E, 0xFE20, 0xFE23,
        ],
        // mc
        &[
            0x0903, 0x0903, 0x093E, 0x0940, 0x0949, 0x094C, 0x0982, 0x0983, 0x09BE, 0x09C0, 0x09C7, 0x09C8,
            0x09CB, 0x09CC, 0x09D7, 0x09D7, 0x0A3E, 0x0A40, 0x0A83, 0x0A83, 0x0ABE, 0x0AC0, 0x0AC9, 0x0AC9,
            0x0ACB, 0x0ACC, 0x0B02, 0x0B03, 0x0B3E, 0x0B3E, 0x0B40, 0x0B40, 0x0B47, 0x0B48, 0x0B4B, 0x0B4C,
            0x0B57, 0x0B57, 0x0BBE, 0x0BBF, 0x0BC1, 0x0BC2, 0x0BC6, 0x0BC8, 0x0BCA, 0x0BCC, 0x0BD7, 0x0BD7,
            0x0C01, 0x0C03, 0x0C41, 0x0C44, 0x0C82, 0x0C83, 0x0CBE, 0x0CBE, 0x0CC0, 0x0CC4, 0x0CC7, 0x0CC8,
            0x0CCA, 0x0CCB, 0x0CD5, 0x0CD6, 0x0D02, 0x0D03, 0x0D3E, 0x0D40, 0x0D46, 0x0D48, 0x0D4A, 0x0D4C,
            0x0D57, 0x0D57, 0x0F3E, 0x0F3F, 0x0F7F, 0x0F7F, 0x302E, 0x302F,
        ],
        // me
        &[
            0x20DD, 0x20E0,
        ],
        // nd
        &[
            0x0030, 0x0039, 0x0660, 0x0669, 0x06F0, 0x06F9, 0x0966, 0x096F, 0x09E6, 0x09EF, 0x0A66, 0x0A6F,
            0x0AE6, 0x0AEF, 0x0B66, 0x0B6F, 0x0BE7, 0x0BEF, 0x0C66, 0x0C6F, 0x0CE6, 0x0CEF, 0x0D66, 0x0D6F,
            0x0E50, 0x0E59, 0x0ED0, 0x0ED9, 0x0F20, 0x0F29, 0xFF10, 0xFF19,
        ],
        // nl
        &[
            0x2160, 0x2182, 0x3007, 0x3007, 0x3021, 0x3029,
        ],
        // no
        &[
            0x00B2, 0x00B3, 0x00B9, 0x00B9, 0x00BC, 0x00BE, 0x09F4, 0x09F9, 0x0BF0, 0x0BF2, 0x0F2A, 0x0F33,
            0x2070, 0x2070, 0x2074, 0x2079, 0x2080, 0x2089, 0x2153, 0x215F, 0x2460, 0x249B, 0x24EA, 0x24EA,
            0x2776, 0x2793, 0x3192, 0x3195, 0x3220, 0x3229, 0x3280, 0x3289,
        ],
        // pc
        &[
            0x005F, 0x005F, 0x203F, 0x2040, 0xFE33, 0xFE34, 0xFE4D, 0xFE4F, 0xFF3F, 0xFF3F,
        ],
        // pd
        &[
            0x002D, 0x002D, 0x05BE, 0x05BE, 0x2010, 0x2015, 0x301C, 0x301C, 0x3030, 0x3030, 0xFE31, 0xFE32,
            0xFE58, 0xFE58, 0xFE63, 0xFE63, 0xFF0D, 0xFF0D,
        ],
        // ps
        &[
            0x0028, 0x0028, 0x005B, 0x005B, 0x007B, 0x007B, 0x0F3A, 0x0F3A, 0x0F3C, 0x0F3C, 0x201A, 0x201A,
            0x201E, 0x201E, 0x2045, 0x2045, 0x207D, 0x207D, 0x208D, 0x208D, 0x2308, 0x2308, 0x230A, 0x230A,
            0x2329, 0x2329, 0x3008, 0x3008, 0x300A, 0x300A, 0x300C, 0x300C, 0x300E, 0x300E, 0x3010, 0x3010,
            0x3014, 0x3014, 0x3016, 0x3016, 0x3018, 0x3018, 0x301A, 0x301A, 0x301D, 0x301D, 0xFD3F, 0xFD3F,
            0xFE35, 0xFE35, 0xFE37, 0xFE37, 0xFE39, 0xFE39, 0xFE3B, 0xFE3B, 0xFE3D, 0xFE3D, 0xFE3F, 0xFE3F,
            0xFE41, 0xFE41, 0xFE43, 0xFE43, 0xFE59, 0xFE59, 0xFE5B, 0xFE5B, 0xFE5D, 0xFE5D, 0xFF08, 0xFF08,
            0xFF3B, 0xFF3B, 0xFF5B, 0xFF5B, 0xFF62, 0xFF62,
        ],
        // pe
        &[
            0x0029, 0x0029, 0x005D, 0x005D, 0x007D, 0x007D, 0x0F3B, 0x0F3B, 0x0F3D, 0x0F3D, 0x2046, 0x2046,
            0x207E, 0x207E, 0x208E, 0x208E, 0x2309, 0x2309, 0x230B, 0x230B, 0x232A, 0x232A, 0x3009, 0x3009,
            0x300B, 0x300B, 0x300D, 0x300D, 0x300F, 0x300F, 0x3011, 0x3011, 0x3015, 0x3015, 0x3017, 0x3017,
            0x3019, 0x3019, 0x301B, 0x301B, 0x301E, 0x301F, 0xFD3E, 0xFD3E, 0xFE36, 0xFE36, 0xFE38, 0xFE38,
            0xFE3A, 0xFE3A, 0xFE3C, 0xFE3C, 0xFE3E, 0xFE3E, 0xFE40, 0xFE40, 0xFE42, 0xFE42, 0xFE44, 0xFE44,
            0xFE5A, 0xFE5A, 0xFE5C, 0xFE5C, 0xFE5E, 0xFE5E, 0xFF09, 0xFF09, 0xFF3D, 0xFF3D, 0xFF5D, 0xFF5D,
            0xFF63, 0xFF63,
        ],
        // pi
        &[
            0x00AB, 0x00AB, 0x2018, 0x2018, 0x201B, 0x201C, 0x201F, 0x201F, 0x2039, 0x2039,
        ],
        // pf
        &[
            0x00BB, 0x00BB, 0x2019, 0x2019, 0x201D, 0x201D, 0x203A, 0x203A,
        ],
        // po
        &[
            0x0021, 0x0023, 0x0025, 0x0027, 0x002A, 0x002A, 0x002C, 0x002C, 0x002E, 0x002F, 0x003A, 0x003B,
            0x003F, 0x0040, 0x005C, 0x005C, 0x00A1, 0x00A1, 0x00A7, 0x00A7, 0x00B6, 0x00B7, 0x00BF, 0x00BF,
            0x037E, 0x037E, 0x0387, 0x0387, 0x055A, 0x055F, 0x0589, 0x0589, 0x05C0, 0x05C0, 0x05C3, 0x05C3,
            0x05F3, 0x05F4, 0x060C, 0x060C, 0x061B, 0x061B, 0x061F, 0x061F, 0x066A, 0x066D, 0x06D4, 0x06D4,
            0x0964, 0x0965, 0x0970, 0x0970, 0x0E4F, 0x0E4F, 0x0E5A, 0x0E5B, 0x0F04, 0x0F12, 0x0F14, 0x0F14,
            0x0F85, 0x0F85, 0x10FB, 0x10FB, 0x2016, 0x2017, 0x2020, 0x2027, 0x2030, 0x2038, 0x203B, 0x203E,
            0x2041, 0x2043, 0x3001, 0x3003, 0x30FB, 0x30FB, 0xFE30, 0xFE30, 0xFE49, 0xFE4C, 0xFE50, 0xFE52,
            0xFE54, 0xFE57, 0xFE5F, 0xFE61, 0xFE68, 0xFE68, 0xFE6A, 0xFE6B, 0xFF01, 0xFF03, 0xFF05, 0xFF07,
            0xFF0A, 0xFF0A, 0xFF0C, 0xFF0C, 0xFF0E, 0xFF0F, 0xFF1A, 0xFF1B, 0xFF1F, 0xFF20, 0xFF3C, 0xFF3C,
            0xFF61, 0xFF61, 0xFF64, 0xFF65,
        ],
        // sm
        &[
            0x002B, 0x002B, 0x003C, 0x003E, 0x007C, 0x007C, 0x007E, 0x007E, 0x00AC, 0x00AC, 0x00B1, 0x00B1,
            0x00D7, 0x00D7, 0x00F7, 0x00F7, 0x2044, 0x2044, 0x207A, 0x207C, 0x208A, 0x208C, 0x2118, 0x2118,
            0x2190, 0x2194, 0x219A, 0x219B, 0x21A0, 0x21A0, 0x21A3, 0x21A3, 0x21A6, 0x21A6, 0x21AE, 0x21AE,
            0x21CE, 0x21CF, 0x21D2, 0x21D2, 0x21D4, 0x21D4, 0x2200, 0x22F1, 0x2320, 0x2321, 0x25B7, 0x25B7,
            0x25C1, 0x25C1, 0x266F, 0x266F, 0xFB29, 0xFB29, 0xFE62, 0xFE62, 0xFE64, 0xFE66, 0xFF0B, 0xFF0B,
            0xFF1C, 0xFF1E, 0xFF5C, 0xFF5C, 0xFF5E, 0xFF5E, 0xFFE2, 0xFFE2, 0xFFE9, 0xFFEC,
        ],
        // sc
        &[
            0x0024, 0x0024, 0x00A2, 0x00A5, 0x09F2, 0x09F3, 0x0E3F, 0x0E3F, 0x20A0, 0x20AB, 0xFE69, 0xFE69,
            0xFF04, 0xFF04, 0xFFE0, 0xFFE1, 0xFFE5, 0xFFE6,
        ],
        // sk
        &[
            0x005E, 0x005E, 0x0060, 0x0060, 0x00A8, 0x00A8, 0x00AF, 0x00AF, 0x00B4, 0x00B4, 0x00B8, 0x00B8,
            0x02C2, 0x02C5, 0x02D2, 0x02DE, 0x02E5, 0x02E9, 0x0375, 0x0375, 0x0384, 0x0385, 0x1FBD, 0x1FBD,
            0x1FBF, 0x1FC1, 0x1FCD, 0x1FCF, 0x1FDD, 0x1FDF, 0x1FED, 0x1FEF, 0x1FFD, 0x1FFE, 0x309B, 0x309C,
            0xFF3E, 0xFF3E, 0xFF40, 0xFF40, 0xFFE3, 0xFFE3,
        ],
        // so
        &[
            0x00A6, 0x00A6, 0x00A9, 0x00A9, 0x00AE, 0x00AE, 0x00B0, 0x00B0, 0x0482, 0x0482, 0x06DE, 0x06DE,
            0x06E9, 0x06E9, 0x09FA, 0x09FA, 0x0B70, 0x0B70, 0x0F01, 0x0F03, 0x0F13, 0x0F13, 0x0F15, 0x0F17,
            0x0F1A, 0x0F1F, 0x0F34, 0x0F34, 0x0F36, 0x0F36, 0x0F38, 0x0F38, 0x2100, 0x2101, 0x2103, 0x2106,
            0x2108, 0x2109, 0x2114, 0x2114, 0x2116, 0x2117, 0x211E, 0x2123, 0x2125, 0x2125, 0x2127, 0x2127,
            0x2129, 0x2129, 0x212E, 0x212E, 0x2195, 0x2199, 0x219C, 0x219F, 0x21A1, 0x21A2, 0x21A4, 0x21A5,
            0x21A7, 0x21AD, 0x21AF, 0x21CD, 0x21D0, 0x21D1, 0x21D3, 0x21D3, 0x21D5, 0x21EA, 0x2300, 0x2300,
            0x2302, 0x2307, 0x230C, 0x231F, 0x2322, 0x2328, 0x232B, 0x237A, 0x2400, 0x2424, 0x2440, 0x244A,
            0x249C, 0x24E9, 0x2500, 0x2595, 0x25A0, 0x25B6, 0x25B8, 0x25C0, 0x25C2, 0x25EF, 0x2600, 0x2613,
            0x261A, 0x266E, 0x2701, 0x2704, 0x2706, 0x2709, 0x270C, 0x2727, 0x2729, 0x274B, 0x274D, 0x274D,
            0x274F, 0x2752, 0x2756, 0x2756, 0x2758, 0x275E, 0x2761, 0x2767, 0x2794, 0x2794, 0x2798, 0x27AF,
            0x27B1, 0x27BE, 0x3004, 0x3004, 0x3012, 0x3013, 0x3020, 0x3020, 0x3036, 0x3037, 0x303F, 0x303F,
            0x3190, 0x3191, 0x3196, 0x319F, 0x3200, 0x321C, 0x322A, 0x3243, 0x3260, 0x327B, 0x327F, 0x327F,
            0x328A, 0x32B0, 0x32C0, 0x32CB, 0x32D0, 0x32FE, 0x3300, 0x3376, 0x337B, 0x33DD, 0x33E0, 0x33FE,
            0xFFE4, 0xFFE4, 0xFFE8, 0xFFE8, 0xFFED, 0xFFEE, 0xFFFD, 0xFFFD,
        ],
        // zs
        &[
            0x0020, 0x0020, 0x00A0, 0x00A0, 0x2000, 0x200A, 0x3000, 0x3000,
        ],
        // zl
        &[
            0x2028, 0x2028,
        ],
        // zp
        &[
            0x2029, 0x2029,
        ],
        // cc
        &[
            0x0000, 0x001F, 0x007F, 0x009F,
        ],
        // cf
        &[
            0x00AD, 0x00AD, 0x06DD, 0x06DD, 0x200B, 0x200F, 0x202A, 0x202E, 0x206A, 0x206F, 0xFEFF, 0xFEFF,
        ],
        // cs
        &[
            0xD800, 0xDFFF,
        ],
        // co
        &[
            0xE000, 0xF8FF, 0xF0000, 0xFFFFD, 0x100000, 0x10FFFD,
        ],
        // cn
        &[
            0x01F6, 0x01F9, 0x0218, 0x024F, 0x02A9, 0x02AF, 0x02DF, 0x02DF, 0x02EA, 0x02FF, 0x0346, 0x035F,
            0x0362, 0x0373, 0x0376, 0x0379, 0x037B, 0x037D, 0x037F, 0x0383, 0x038B, 0x038B, 0x038D, 0x038D,
            0x03A2, 0x03A2, 0x03CF, 0x03CF, 0x03D7, 0x03D9, 0x03DB, 0x03DB, 0x03DD, 0x03DD, 0x03DF, 0x03DF,
            0x03E1, 0x03E1, 0x03F4, 0x0400, 0x040D, 0x040D, 0x0450, 0x0450, 0x045D, 0x045D, 0x0487, 0x048F,
            0x04C5, 0x04C6, 0x04C9, 0x04CA, 0x04CD, 0x04CF, 0x04EC, 0x04ED, 0x04F6, 0x04F7, 0x04FA, 0x0530,
            0x0557, 0x0558, 0x0560, 0x0560, 0x0588, 0x0588, 0x058A, 0x0590, 0x05A2, 0x05A2, 0x05BA, 0x05BA,
            0x05C5, 0x05CF, 0x05EB, 0x05EF, 0x05F5, 0x060B, 0x060D, 0x061A, 0x061C, 0x061E, 0x0620, 0x0620,
            0x063B, 0x063F, 0x0653, 0x065F, 0x066E, 0x066F, 0x06B8, 0x06B9, 0x06BF, 0x06BF, 0x06CF, 0x06CF,
            0x06EE, 0x06EF, 0x06FA, 0x0900, 0x0904, 0x0904, 0x093A, 0x093B, 0x094E, 0x094F, 0x0955, 0x0957,
            0x0971, 0x0980, 0x0984, 0x0984, 0x098D, 0x098E, 0x0991, 0x0992, 0x09A9, 0x09A9, 0x09B1, 0x09B1,
            0x09B3, 0x09B5, 0x09BA, 0x09BB, 0x09BD, 0x09BD, 0x09C5, 0x09C6, 0x09C9, 0x09CA, 0x09CE, 0x09D6,
            0x09D8, 0x09DB, 0x09DE, 0x09DE, 0x09E4, 0x09E5, 0x09FB, 0x0A01, 0x0A03, 0x0A04, 0x0A0B, 0x0A0E,
            0x0A11, 0x0A12, 0x0A29, 0x0A29, 0x0A31, 0x0A31, 0x0A34, 0x0A34, 0x0A37, 0x0A37, 0x0A3A, 0x0A3B,
            0x0A3D, 0x0A3D, 0x0A43, 0x0A46, 0x0A49, 0x0A4A, 0x0A4E, 0x0A58, 0x0A5D, 0x0A5D, 0x0A5F, 0x0A65,
            0x0A75, 0x0A80, 0x0A84, 0x0A84, 0x0A8C, 0x0A8C, 0x0A8E, 0x0A8E, 0x0A92, 0x0A92, 0x0AA9, 0x0AA9,
            0x0AB1, 0x0AB1, 0x0AB4, 0x0AB4, 0x0ABA, 0x0ABB, 0x0AC6, 0x0AC6, 0x0ACA, 0x0ACA, 0x0ACE, 0x0ACF,
            0x0AD1, 0x0ADF, 0x0AE1, 0x0AE5, 0x0AF0, 0x0B00, 0x0B04, 0x0B04, 0x0B0D, 0x0B0E, 0x0B11, 0x0B12,
            0x0B29, 0x0B29, 0x0B31, 0x0B31, 0x0B34, 0x0B35, 0x0B3A, 0x0B3B, 0x0B44, 0x0B46, 0x0B49, 0x0B4A,
            0x0B4E, 0x0B55, 0x0B58, 0x0B5B, 0x0B5E, 0x0B5E, 0x0B62, 0x0B65, 0x0B71, 0x0B81, 0x0B84, 0x0B84,
            0x0B8B, 0x0B8D, 0x0B91, 0x0B91, 0x0B96, 0x0B98, 0x0B9B, 0x0B9B, 0x0B9D, 0x0B9D, 0x0BA0, 0x0BA2,
            0x0BA5, 0x0BA7, 0x0BAB, 0x0BAD, 0x0BB6, 0x0BB6, 0x0BBA, 0x0BBD, 0x0BC3, 0x0BC5, 0x0BC9, 0x0BC9,
            0x0BCE, 0x0BD6, 0x0BD8, 0x0BE6, 0x0BF3, 0x0C00, 0x0C04, 0x0C04, 0x0C0D, 0x0C0D, 0x0C11, 0x0C11,
            0x0C29, 0x0C29, 0x0C34, 0x0C34, 0x0C3A, 0x0C3D, 0x0C45, 0x0C45, 0x0C49, 0x0C49, 0x0C4E, 0x0C54,
            0x0C57, 0x0C5F, 0x0C62, 0x0C65, 0x0C70, 0x0C81, 0x0C84, 0x0C84, 0x0C8D, 0x0C8D, 0x0C91, 0x0C91,
            0x0CA9, 0x0CA9, 0x0CB4, 0x0CB4, 0x0CBA, 0x0CBD, 0x0CC5, 0x0CC5, 0x0CC9, 0x0CC9, 0x0CCE, 0x0CD4,
            0x0CD7, 0x0CDD, 0x0CDF, 0x0CDF, 0x0CE2, 0x0CE5, 0x0CF0, 0x0D01, 0x0D04, 0x0D04, 0x0D0D, 0x0D0D,
            0x0D11, 0x0D11, 0x0D29, 0x0D29, 0x0D3A, 0x0D3D, 0x0D44, 0x0D45, 0x0D49, 0x0D49, 0x0D4E, 0x0D56,
            0x0D58, 0x0D5F, 0x0D62, 0x0D65, 0x0D70, 0x0E00, 0x0E3B, 0x0E3E, 0x0E5C, 0x0E80, 0x0E83, 0x0E83,
            0x0E85, 0x0E86, 0x0E89, 0x0E89, 0x0E8B, 0x0E8C, 0x0E8E, 0x0E93, 0x0E98, 0x0E98, 0x0EA0, 0x0EA0,
            0x0EA4, 0x0EA4, 0x0EA6, 0x0EA6, 0x0EA8, 0x0EA9, 0x0EAC, 0x0EAC, 0x0EBA, 0x0EBA, 0x0EBE, 0x0EBF,
            0x0EC5, 0x0EC5, 0x0EC7, 0x0EC7, 0x0ECE, 0x0ECF, 0x0EDA, 0x0EDB, 0x0EDE, 0x0EFF, 0x0F48, 0x0F48,
            0x0F6A, 0x0F70, 0x0F8C, 0x0F8F, 0x0F96, 0x0F96, 0x0F98, 0x0F98, 0x0FAE, 0x0FB0, 0x0FB8, 0x0FB8,
            0x0FBA, 0x109F, 0x10C6, 0x10CF, 0x10F7, 0x10FA, 0x10FC, 0x10FF, 0x115A, 0x115E, 0x11A3, 0x11A7,
            0x11FA, 0x1DFF, 0x1E9C, 0x1E9F, 0x1EFA, 0x1EFF, 0x1F16, 0x1F17, 0x1F1E, 0x1F1F, 0x1F46, 0x1F47,
            0x1F4E, 0x1F4F, 0x1F58, 0x1F58, 0x1F5A, 0x1F5A, 0x1F5C, 0x1F5C, 0x1F5E, 0x1F5E, 0x1F7E, 0x1F7F,
            0x1FB5, 0x1FB5, 0x1FC5, 0x1FC5, 0x1FD4, 0x1FD5, 0x1FDC, 0x1FDC, 0x1FF0, 0x1FF1, 0x1FF5, 0x1FF5,
            0x1FFF, 0x1FFF, 0x202F, 0x202F, 0x2047, 0x2069, 0x2071, 0x2073, 0x208F, 0x209F, 0x20AC, 0x20CF,
            0x20E2, 0x20FF, 0x2139, 0x2152, 0x2183, 0x218F, 0x21EB, 0x21FF, 0x22F2, 0x22FF, 0x2301, 0x2301,
            0x237B, 0x23FF, 0x2425, 0x243F, 0x244B, 0x245F, 0x24EB, 0x24FF, 0x2596, 0x259F, 0x25F0, 0x25FF,
            0x2614, 0x2619, 0x2670, 0x2700, 0x2705, 0x2705, 0x270A, 0x270B, 0x2728, 0x2728, 0x274C, 0x274C,
            0x274E, 0x274E, 0x2753, 0x2755, 0x2757, 0x2757, 0x275F, 0x2760, 0x2768, 0x2775, 0x2795, 0x2797,
            0x27B0, 0x27B0, 0x27BF, 0x2FFF, 0x3038, 0x303E, 0x3040, 0x3040, 0x3095, 0x3098, 0x309F, 0x30A0,
            0x30FF, 0x3104, 0x312D, 0x3130, 0x318F, 0x318F, 0x31A0, 0x31FF, 0x321D, 0x321F, 0x3244, 0x325F,
            0x327C, 0x327E, 0x32B1, 0x32BF, 0x32CC, 0x32CF, 0x32FF, 0x32FF, 0x3377, 0x337A, 0x33DE, 0x33DF,
            0x33FF, 0x4DFF, 0x9FA6, 0xABFF, 0xD7A4, 0xD7FF, 0xFA2E, 0xFAFF, 0xFB07, 0xFB12, 0xFB18, 0xFB1D,
            0xFB37, 0xFB37, 0xFB3D, 0xFB3D, 0xFB3F, 0xFB3F, 0xFB42, 0xFB42, 0xFB45, 0xFB45, 0xFBB2, 0xFBD2,
            0xFD40, 0xFD4F, 0xFD90, 0xFD91, 0xFDC8, 0xFDEF, 0xFDFC, 0xFE1F, 0xFE24, 0xFE2F, 0xFE45, 0xFE48,
            0xFE53, 0xFE53, 0xFE67, 0xFE67, 0xFE6C, 0xFE6F, 0xFE73, 0xFE73, 0xFE75, 0xFE75, 0xFEFD, 0xFEFE,
            0xFF00, 0xFF00, 0xFF5F, 0xFF60, 0xFFBF, 0xFFC1, 0xFFC8, 0xFFC9, 0xFFD0, 0xFFD1, 0xFFD8, 0xFFD9,
            0xFFDD, 0xFFDF, 0xFFE7, 0xFFE7, 0xFFEF, 0xFFFC, 0xFFFE, 0xEFFFF, 0xFFFFE, 0xFFFFF, 0x10FFFE, 0x10FFFF,
        ],
        // lc
        &[
            0x0041, 0x005A, 0x0061, 0x007A, 0x00B5, 0x00B5, 0x00C0, 0x00D6, 0x00D8, 0x00F6, 0x00F8, 0x01BA,
            0x01BC, 0x01BF, 0x01C4, 0x01F5, 0x01FA, 0x0217, 0x0250, 0x0293, 0x0295, 0x02A8, 0x0386, 0x0386,
            0x0388, 0x038A, 0x038C, 0x038C, 0x038E, 0x03A1, 0x03A3, 0x03CE, 0x03D0, 0x03D6, 0x03DA, 0x03DA,
            0x03DC, 0x03DC, 0x03DE, 0x03DE, 0x03E0, 0x03E0, 0x03E2, 0x03F3, 0x0401, 0x040C, 0x040E, 0x044F,
            0x0451, 0x045C, 0x045E, 0x0481, 0x0490, 0x04C4, 0x04C7, 0x04C8, 0x04CB, 0x04CC, 0x04D0, 0x04EB,
            0x04EE, 0x04F5, 0x04F8, 0x04F9, 0x0531, 0x0556, 0x0561, 0x0587, 0x10A0, 0x10C5, 0x10D0, 0x10F6,
            0x1E00, 0x1E9B, 0x1EA0, 0x1EF9, 0x1F00, 0x1F15, 0x1F18, 0x1F1D, 0x1F20, 0x1F45, 0x1F48, 0x1F4D,
            0x1F50, 0x1F57, 0x1F59, 0x1F59, 0x1F5B, 0x1F5B, 0x1F5D, 0x1F5D, 0x1F5F, 0x1F7D, 0x1F80, 0x1FB4,
            0x1FB6, 0x1FBC, 0x1FBE, 0x1FBE, 0x1FC2, 0x1FC4, 0x1FC6, 0x1FCC, 0x1FD0, 0x1FD3, 0x1FD6, 0x1FDB,
            0x1FE0, 0x1FEC, 0x1FF2, 0x1FF4, 0x1FF6, 0x1FFC, 0x2102, 0x2102, 0x2107, 0x2107, 0x210A, 0x2113,
            0x2115, 0x2115, 0x2119, 0x211D, 0x2124, 0x2124, 0x2126, 0x2126, 0x2128, 0x2128, 0x212A, 0x212D,
            0x212F, 0x2134, 0xFB00, 0xFB06, 0xFB13, 0xFB17, 0xFF21, 0xFF3A, 0xFF41, 0xFF5A,
        ],
        // arabic
        &[
            0x0621, 0x063A, 0x0641, 0x064A, 0x0660, 0x066D, 0x0671, 0x06B7, 0x06BA, 0x06BE, 0x06C0, 0x06CE,
            0x06D0, 0x06DC, 0x06DE, 0x06ED, 0x06F0, 0x06F9, 0xFB50, 0xFBB1, 0xFBD3, 0xFD3D, 0xFD50, 0xFD8F,
            0xFD92, 0xFDC7, 0xFDF0, 0xFDFB, 0xFE70, 0xFE72, 0xFE74, 0xFE74, 0xFE76, 0xFEFC,
        ],
        // armenian
        &[
            0x0531, 0x0556, 0x0559, 0x055F, 0x0561, 0x0587, 0x0589, 0x0589, 0xFB13, 0xFB17,
        ],
        // bengali
        &[
            0x0981, 0x0983, 0x0985, 0x098C, 0x098F, 0x0990, 0x0993, 0x09A8, 0x09AA, 0x09B0, 0x09B2, 0x09B2,
            0x09B6, 0x09B9, 0x09BC, 0x09BC, 0x09BE, 0x09C4, 0x09C7, 0x09C8, 0x09CB, 0x09CD, 0x09D7, 0x09D7,
            0x09DC, 0x09DD, 0x09DF, 0x09E3, 0x09E6, 0x09FA,
        ],
        // bopomofo
        &[
            0x3105, 0x312C,
        ],
        // coptic
        &[
            0x03E2, 0x03EF,
        ],
        // cyrillic
        &[
            0x0401, 0x040C, 0x040E, 0x044F, 0x0451, 0x045C, 0x045E, 0x0484, 0x0490, 0x04C4, 0x04C7, 0x04C8,
            0x04CB, 0x04CC, 0x04D0, 0x04EB, 0x04EE, 0x04F5, 0x04F8, 0x04F9,
        ],
        // devanagari
        &[
            0x0901, 0x0903, 0x0905, 0x0939, 0x093C, 0x094D, 0x0950, 0x0950, 0x0958, 0x0963, 0x0966, 0x0970,
        ],
        // georgian
        &[
            0x10A0, 0x10C5, 0x10D0, 0x10F6,
        ],
        // greek
        &[
            0x0375, 0x0375, 0x037A, 0x037A, 0x0384, 0x0384, 0x0386, 0x0386, 0x0388, 0x038A, 0x038C, 0x038C,
            0x038E, 0x03A1, 0x03A3, 0x03CE, 0x03D0, 0x03D6, 0x03DA, 0x03DA, 0x03DC, 0x03DC, 0x03DE, 0x03DE,
            0x03E0, 0x03E0, 0x03F0, 0x03F3, 0x1F00, 0x1F15, 0x1F18, 0x1F1D, 0x1F20, 0x1F45, 0x1F48, 0x1F4D,
            0x1F50, 0x1F57, 0x1F59, 0x1F59, 0x1F5B, 0x1F5B, 0x1F5D, 0x1F5D, 0x1F5F, 0x1F7D, 0x1F80, 0x1FB4,
            0x1FB6, 0x1FC4, 0x1FC6, 0x1FD3, 0x1FD6, 0x1FDB, 0x1FDD, 0x1FEF, 0x1FF2, 0x1FF4, 0x1FF6, 0x1FFE,
            0x2126, 0x2126,
        ],
        // gujarati
        &[
            0x0A81, 0x0A83, 0x0A85, 0x0A8B, 0x0A8D, 0x0A8D, 0x0A8F, 0x0A91, 0x0A93, 0x0AA8, 0x0AAA, 0x0AB0,
            0x0AB2, 0x0AB3, 0x0AB5, 0x0AB9, 0x0ABC, 0x0AC5, 0x0AC7, 0x0AC9, 0x0ACB, 0x0ACD, 0x0AD0, 0x0AD0,
            0x0AE0, 0x0AE0, 0x0AE6, 0x0AEF,
        ],
        // gurmukhi
        &[
            0x0A02, 0x0A02, 0x0A05, 0x0A0A, 0x0A0F, 0x0A10, 0x0A13, 0x0A28, 0x0A2A, 0x0A30, 0x0A32, 0x0A33,
            0x0A35, 0x0A36, 0x0A38, 0x0A39, 0x0A3C, 0x0A3C, 0x0A3E, 0x0A42, 0x0A47, 0x0A48, 0x0A4B, 0x0A4D,
            0x0A59, 0x0A5C, 0x0A5E, 0x0A5E, 0x0A66, 0x0A74,
        ],
        // hangul
        &[
            0x1100, 0x1159, 0x115F, 0x11A2, 0x11A8, 0x11F9, 0x302E, 0x302F, 0x3131, 0x318E, 0x3200, 0x321C,
            0x3260, 0x327B, 0xAC00, 0xD7A3, 0xFFA0, 0xFFBE, 0xFFC2, 0xFFC7, 0xFFCA, 0xFFCF, 0xFFD2, 0xFFD7,
            0xFFDA, 0xFFDC,
        ],
        // han
        &[
            0x3005, 0x3005, 0x3007, 0x3007, 0x3021, 0x3029, 0x4E00, 0x9FA5, 0xF900, 0xFA2D,
        ],
        // hebrew
        &[
            0x0591, 0x05A1, 0x05A3, 0x05B9, 0x05BB, 0x05C4, 0x05D0, 0x05EA, 0x05F0, 0x05F4, 0xFB1E, 0xFB36,
            0xFB38, 0xFB3C, 0xFB3E, 0xFB3E, 0xFB40, 0xFB41, 0xFB43, 0xFB44, 0xFB46, 0xFB4F,
        ],
        // hiragana
        &[
            0x3041, 0x3094, 0x309D, 0x309E,
        ],
        // katakana
        &[
            0x30A1, 0x30FA, 0x30FD, 0x30FE, 0x32D0, 0x32FE, 0x3300, 0x3357, 0xFF66, 0xFF6F, 0xFF71, 0xFF9D,
        ],
        // kannada
        &[
            0x0C82, 0x0C83, 0x0C85, 0x0C8C, 0x0C8E, 0x0C90, 0x0C92, 0x0CA8, 0x0CAA, 0x0CB3, 0x0CB5, 0x0CB9,
            0x0CBE, 0x0CC4, 0x0CC6, 0x0CC8, 0x0CCA, 0x0CCD, 0x0CD5, 0x0CD6, 0x0CDE, 0x0CDE, 0x0CE0, 0x0CE1,
            0x0CE6, 0x0CEF,
        ],
        // lao
        &[
            0x0E81, 0x0E82, 0x0E84, 0x0E84, 0x0E87, 0x0E88, 0x0E8A, 0x0E8A, 0x0E8D, 0x0E8D, 0x0E94, 0x0E97,
            0x0E99, 0x0E9F, 0x0EA1, 0x0EA3, 0x0EA5, 0x0EA5, 0x0EA7, 0x0EA7, 0x0EAA, 0x0EAB, 0x0EAD, 0x0EB9,
            0x0EBB, 0x0EBD, 0x0EC0, 0x0EC4, 0x0EC6, 0x0EC6, 0x0EC8, 0x0ECD, 0x0ED0, 0x0ED9, 0x0EDC, 0x0EDD,
        ],
        // latin
        &[
            0x0041, 0x005A, 0x0061, 0x007A, 0x00AA, 0x00AA, 0x00BA, 0x00BA, 0x00C0, 0x00D6, 0x00D8, 0x00F6,
            0x00F8, 0x01F5, 0x01FA, 0x0217, 0x0250, 0x02A8, 0x02B0, 0x02B8, 0x02E0, 0x02E4, 0x1E00, 0x1E9B,
            0x1EA0, 0x1EF9, 0x207F, 0x207F, 0x212A, 0x212B, 0x2132, 0x2132, 0x2160, 0x2182, 0xFB00, 0xFB06,
            0xFF21, 0xFF3A, 0xFF41, 0xFF5A,
        ],
        // malayalam
        &[
            0x0D02, 0x0D03, 0x0D05, 0x0D0C, 0x0D0E, 0x0D10, 0x0D12, 0x0D28, 0x0D2A, 0x0D39, 0x0D3E, 0x0D43,
            0x0D46, 0x0D48, 0x0D4A, 0x0D4D, 0x0D57, 0x0D57, 0x0D60, 0x0D61, 0x0D66, 0x0D6F,
        ],
        // oriya
        &[
            0x0B01, 0x0B03, 0x0B05, 0x0B0C, 0x0B0F, 0x0B10, 0x0B13, 0x0B28, 0x0B2A, 0x0B30, 0x0B32, 0x0B33,
            0x0B36, 0x0B39, 0x0B3C, 0x0B43, 0x0B47, 0x0B48, 0x0B4B, 0x0B4D, 0x0B56, 0x0B57, 0x0B5C, 0x0B5D,
            0x0B5F, 0x0B61, 0x0B66, 0x0B70,
        ],
        // tamil
        &[
            0x0B82, 0x0B83, 0x0B85, 0x0B8A, 0x0B8E, 0x0B90, 0x0B92, 0x0B95, 0x0B99, 0x0B9A, 0x0B9C, 0x0B9C,
            0x0B9E, 0x0B9F, 0x0BA3, 0x0BA4, 0x0BA8, 0x0BAA, 0x0BAE, 0x0BB5, 0x0BB7, 0x0BB9, 0x0BBE, 0x0BC2,
            0x0BC6, 0x0BC8, 0x0BCA, 0x0BCD, 0x0BD7, 0x0BD7, 0x0BE7, 0x0BF2,
        ],
        // telugu
        &[
            0x0C01, 0x0C03, 0x0C05, 0x0C0C, 0x0C0E, 0x0C10, 0x0C12, 0x0C28, 0x0C2A, 0x0C33, 0x0C35, 0x0C39,
            0x0C3E, 0x0C44, 0x0C46, 0x0C48, 0x0C4A, 0x0C4D, 0x0C55, 0x0C56, 0x0C60, 0x0C61, 0x0C66, 0x0C6F,
        ],
        // thai
        &[
            0x0E01, 0x0E3A, 0x0E40, 0x0E5B,
        ],
        // tibetan
        &[
            0x0F00, 0x0F47, 0x0F49, 0x0F69, 0x0F71, 0x0F8B, 0x0F90, 0x0F95, 0x0F97, 0x0F97, 0x0F99, 0x0FAD,
            0x0FB1, 0x0FB7, 0x0FB9, 0x0FB9,
        ],
        // inherited
        &[
            0x0300, 0x0345, 0x0360, 0x0361, 0x0485, 0x0486, 0x064B, 0x0652, 0x0670, 0x0670, 0x0951, 0x0954,
            0x200C, 0x200D, 0x20D0, 0x20E1, 0x302A, 0x302D, 0x3099, 0x309A, 0xFE20, 0xFE23,
        ],
        // common
        &[
            0x0000, 0x0040, 0x005B, 0x0060, 0x007B, 0x00A9, 0x00AB, 0x00B9, 0x00BB, 0x00BF, 0x00D7, 0x00D7,
            0x00F7, 0x00F7, 0x02B9, 0x02DE, 0x02E5, 0x02E9, 0x0374, 0x0374, 0x037E, 0x037E, 0x0385, 0x0385,
            0x0387, 0x0387, 0x060C, 0x060C, 0x061B, 0x061B, 0x061F, 0x061F, 0x0640, 0x0640, 0x06DD, 0x06DD,
            0x0964, 0x0965, 0x0E3F, 0x0E3F, 0x10FB, 0x10FB, 0x2000, 0x200B, 0x200E, 0x202E, 0x2030, 0x2046,
            0x206A, 0x2070, 0x2074, 0x207E, 0x2080, 0x208E, 0x20A0, 0x20AB, 0x2100, 0x2125, 0x2127, 0x2129,
            0x212C, 0x2131, 0x2133, 0x2138, 0x2153, 0x215F, 0x2190, 0x21EA, 0x2200, 0x22F1, 0x2300, 0x2300,
            0x2302, 0x237A, 0x2400, 0x2424, 0x2440, 0x244A, 0x2460, 0x24EA, 0x2500, 0x2595, 0x25A0, 0x25EF,
            0x2600, 0x2613, 0x261A, 0x266F, 0x2701, 0x2704, 0x2706, 0x2709, 0x270C, 0x2727, 0x2729, 0x274B,
            0x274D, 0x274D, 0x274F, 0x2752, 0x2756, 0x2756, 0x2758, 0x275E, 0x2761, 0x2767, 0x2776, 0x2794,
            0x2798, 0x27AF, 0x27B1, 0x27BE, 0x3000, 0x3004, 0x3006, 0x3006, 0x3008, 0x3020, 0x3030, 0x3037,
            0x303F, 0x303F, 0x309B, 0x309C, 0x30FB, 0x30FC, 0x3190, 0x319F, 0x3220, 0x3243, 0x327F, 0x32B0,
            0x32C0, 0x32CB, 0x3358, 0x3376, 0x337B, 0x33DD, 0x33E0, 0x33FE, 0xFD3E, 0xFD3F, 0xFE30, 0xFE44,
            0xFE49, 0xFE52, 0xFE54, 0xFE66, 0xFE68, 0xFE6B, 0xFEFF, 0xFEFF, 0xFF01, 0xFF20, 0xFF3B, 0xFF40,
            0xFF5B, 0xFF5E, 0xFF61, 0xFF65, 0xFF70, 0xFF70, 0xFF9E, 0xFF9F, 0xFFE0, 0xFFE6, 0xFFE8, 0xFFEE,
            0xFFFD, 0xFFFD,
        ],
        // alphabetic
        &[
            0x0041, 0x005A, 0x0061, 0x007A, 0x00AA, 0x00AA, 0x00B5, 0x00B5, 0x00BA, 0x00BA, 0x00C0, 0x00D6,
            0x00D8, 0x00F6, 0x00F8, 0x01F5, 0x01FA, 0x0217, 0x0250, 0x02A8, 0x02B0, 0x02C1, 0x02C6, 0x02D1,
            0x02E0, 0x02E4, 0x0345, 0x0345, 0x0374, 0x0374, 0x037A, 0x037A, 0x0386, 0x0386, 0x0388, 0x038A,
            0x038C, 0x038C, 0x038E, 0x03A1, 0x03A3, 0x03CE, 0x03D0, 0x03D6, 0x03DA, 0x03DA, 0x03DC, 0x03DC,
            0x03DE, 0x03DE, 0x03E0, 0x03E0, 0x03E2, 0x03F3, 0x0401, 0x040C, 0x040E, 0x044F, 0x0451, 0x045C,
            0x045E, 0x0481, 0x0490, 0x04C4, 0x04C7, 0x04C8, 0x04CB, 0x04CC, 0x04D0, 0x04EB, 0x04EE, 0x04F5,
            0x04F8, 0x04F9, 0x0531, 0x0556, 0x0559, 0x0559, 0x0561, 0x0587, 0x05B0, 0x05B9, 0x05BB, 0x05BD,
            0x05BF, 0x05BF, 0x05C1, 0x05C2, 0x05C4, 0x05C4, 0x05D0, 0x05EA, 0x05F0, 0x05F2, 0x0621, 0x063A,
            0x0640, 0x0652, 0x0670, 0x06B7, 0x06BA, 0x06BE, 0x06C0, 0x06CE, 0x06D0, 0x06D3, 0x06D5, 0x06DC,
            0x06E1, 0x06E8, 0x06ED, 0x06ED, 0x0901, 0x0903, 0x0905, 0x0939, 0x093D, 0x094C, 0x0950, 0x0950,
            0x0958, 0x0963, 0x0981, 0x0983, 0x0985, 0x098C, 0x098F, 0x0990, 0x0993, 0x09A8, 0x09AA, 0x09B0,
            0x09B2, 0x09B2, 0x09B6, 0x09B9, 0x09BE, 0x09C4, 0x09C7, 0x09C8, 0x09CB, 0x09CC, 0x09D7, 0x09D7,
            0x09DC, 0x09DD, 0x09DF, 0x09E3, 0x09F0, 0x09F1, 0x0A02, 0x0A02, 0x0A05, 0x0A0A, 0x0A0F, 0x0A10,
            0x0A13, 0x0A28, 0x0A2A, 0x0A30, 0x0A32, 0x0A33, 0x0A35, 0x0A36, 0x0A38, 0x0A39, 0x0A3E, 0x0A42,
            0x0A47, 0x0A48, 0x0A4B, 0x0A4C, 0x0A59, 0x0A5C, 0x0A5E, 0x0A5E, 0x0A70, 0x0A74, 0x0A81, 0x0A83,
            0x0A85, 0x0A8B, 0x0A8D, 0x0A8D, 0x0A8F, 0x0A91, 0x0A93, 0x0AA8, 0x0AAA, 0x0AB0, 0x0AB2, 0x0AB3,
            0x0AB5, 0x0AB9, 0x0ABD, 0x0AC5, 0x0AC7, 0x0AC9, 0x0ACB, 0x0ACC, 0x0AD0, 0x0AD0, 0x0AE0, 0x0AE0,
            0x0B01, 0x0B03, 0x0B05, 0x0B0C, 0x0B0F, 0x0B10, 0x0B13, 0x0B28, 0x0B2A, 0x0B30, 0x0B32, 0x0B33,
            0x0B36, 0x0B39, 0x0B3D, 0x0B43, 0x0B47, 0x0B48, 0x0B4B, 0x0B4C, 0x0B56, 0x0B57, 0x0B5C, 0x0B5D,
            0x0B5F, 0x0B61, 0x0B82, 0x0B83, 0x0B85, 0x0B8A, 0x0B8E, 0x0B90, 0x0B92, 0x0B95, 0x0B99, 0x0B9A,
            0x0B9C, 0x0B9C, 0x0B9E, 0x0B9F, 0x0BA3, 0x0BA4, 0x0BA8, 0x0BAA, 0x0BAE, 0x0BB5, 0x0BB7, 0x0BB9,
            0x0BBE, 0x0BC2, 0x0BC6, 0x0BC8, 0x0BCA, 0x0BCC, 0x0BD7, 0x0BD7, 0x0C01, 0x0C03, 0x0C05, 0x0C0C,
            0x0C0E, 0x0C10, 0x0C12, 0x0C28, 0x0C2A, 0x0C33, 0x0C35, 0x0C39, 0x0C3E, 0x0C44, 0x0C46, 0x0C48,
            0x0C4A, 0x0C4C, 0x0C55, 0x0C56, 0x0C60, 0x0C61, 0x0C82, 0x0C83, 0x0C85, 0x0C8C, 0x0C8E, 0x0C90,
            0x0C92, 0x0CA8, 0x0CAA, 0x0CB3, 0x0CB5, 0x0CB9, 0x0CBE, 0x0CC4, 0x0CC6, 0x0CC8, 0x0CCA, 0x0CCC,
            0x0CD5, 0x0CD6, 0x0CDE, 0x0CDE, 0x0CE0, 0x0CE1, 0x0D02, 0x0D03, 0x0D05, 0x0D0C, 0x0D0E, 0x0D10,
            0x0D12, 0x0D28, 0x0D2A, 0x0D39, 0x0D3E, 0x0D43, 0x0D46, 0x0D48, 0x0D4A, 0x0D4C, 0x0D57, 0x0D57,
            0x0D60, 0x0D61, 0x0E01, 0x0E3A, 0x0E40, 0x0E46, 0x0E4D, 0x0E4D, 0x0E81, 0x0E82, 0x0E84, 0x0E84,
            0x0E87, 0x0E88, 0x0E8A, 0x0E8A, 0x0E8D, 0x0E8D, 0x0E94, 0x0E97, 0x0E99, 0x0E9F, 0x0EA1, 0x0EA3,
            0x0EA5, 0x0EA5, 0x0EA7, 0x0EA7, 0x0EAA, 0x0EAB, 0x0EAD, 0x0EB9, 0x0EBB, 0x0EBD, 0x0EC0, 0x0EC4,
            0x0EC6, 0x0EC6, 0x0ECD, 0x0ECD, 0x0EDC, 0x0EDD, 0x0F00, 0x0F00, 0x0F40, 0x0F47, 0x0F49, 0x0F69,
            0x0F71, 0x0F81, 0x0F88, 0x0F8B, 0x0F90, 0x0F95, 0x0F97, 0x0F97, 0x0F99, 0x0FAD, 0x0FB1, 0x0FB7,
            0x0FB9, 0x0FB9, 0x10A0, 0x10C5, 0x10D0, 0x10F6, 0x1100, 0x1159, 0x115F, 0x11A2, 0x11A8, 0x11F9,
            0x1E00, 0x1E9B, 0x1EA0, 0x1EF9, 0x1F00, 0x1F15, 0x1F18, 0x1F1D, 0x1F20, 0x1F45, 0x1F48, 0x1F4D,
            0x1F50, 0x1F57, 0x1F59, 0x1F59, 0x1F5B, 0x1F5B, 0x1F5D, 0x1F5D, 0x1F5F, 0x1F7D, 0x1F80, 0x1FB4,
            0x1FB6, 0x1FBC, 0x1FBE, 0x1FBE, 0x1FC2, 0x1FC4, 0x1FC6, 0x1FCC, 0x1FD0, 0x1FD3, 0x1FD6, 0x1FDB,
            0x1FE0, 0x1FEC, 0x1FF2, 0x1FF4, 0x1FF6, 0x1FFC, 0x207F, 0x207F, 0x2102, 0x2102, 0x2107, 0x2107,
            0x210A, 0x2113, 0x2115, 0x2115, 0x2119, 0x211D, 0x2124, 0x2124, 0x2126, 0x2126, 0x2128, 0x2128,
            0x212A, 0x212D, 0x212F, 0x2138, 0x2160, 0x2182, 0x24B6, 0x24E9, 0x3005, 0x3007, 0x3021, 0x3029,
            0x3031, 0x3035, 0x3041, 0x3094, 0x309D, 0x309E, 0x30A1, 0x30FA, 0x30FC, 0x30FE, 0x3105, 0x312C,
            0x3131, 0x318E, 0x4E00, 0x9FA5, 0xAC00, 0xD7A3, 0xF900, 0xFA2D, 0xFB00, 0xFB06, 0xFB13, 0xFB17,
            0xFB1E, 0xFB28, 0xFB2A, 0xFB36, 0xFB38, 0xFB3C, 0xFB3E, 0xFB3E, 0xFB40, 0xFB41, 0xFB43, 0xFB44,
            0xFB46, 0xFBB1, 0xFBD3, 0xFD3D, 0xFD50, 0xFD8F, 0xFD92, 0xFDC7, 0xFDF0, 0xFDFB, 0xFE70, 0xFE72,
            0xFE74, 0xFE74, 0xFE76, 0xFEFC, 0xFF21, 0xFF3A, 0xFF41, 0xFF5A, 0xFF66, 0xFFBE, 0xFFC2, 0xFFC7,
            0xFFCA, 0xFFCF, 0xFFD2, 0xFFD7, 0xFFDA, 0xFFDC,
        ],
        // lowercase
        &[
            0x0061, 0x007A, 0x00AA, 0x00AA, 0x00B5, 0x00B5, 0x00BA, 0x00BA, 0x00DF, 0x00F6, 0x00F8, 0x00FF,
            0x0101, 0x0101, 0x0103, 0x0103, 0x0105, 0x0105, 0x0107, 0x0107, 0x0109, 0x0109, 0x010B, 0x010B,
            0x010D, 0x010D, 0x010F, 0x010F, 0x0111, 0x0111, 0x0113, 0x0113, 0x0115, 0x0115, 0x0117, 0x0117,
            0x0119, 0x0119, 0x011B, 0x011B, 0x011D, 0x011D, 0x011F, 0x011F, 0x0121, 0x0121, 0x0123, 0x0123,
            0x0125, 0x0125, 0x0127, 0x0127, 0x0129, 0x0129, 0x012B, 0x012B, 0x012D, 0x012D, 0x012F, 0x012F,
            0x0131, 0x0131, 0x0133, 0x0133, 0x0135, 0x0135, 0x0137, 0x0138, 0x013A, 0x013A, 0x013C, 0x013C,
            0x013E, 0x013E, 0x0140, 0x0140, 0x0142, 0x0142, 0x0144, 0x0144, 0x0146, 0x0146, 0x0148, 0x0149,
            0x014B, 0x014B, 0x014D, 0x014D, 0x014F, 0x014F, 0x0151, 0x0151, 0x0153, 0x0153, 0x0155, 0x0155,
            0x0157, 0x0157, 0x0159, 0x0159, 0x015B, 0x015B, 0x015D, 0x015D, 0x015F, 0x015F, 0x0161, 0x0161,
            0x0163, 0x0163, 0x0165, 0x0165, 0x0167, 0x0167, 0x0169, 0x0169, 0x016B, 0x016B, 0x016D, 0x016D,
            0x016F, 0x016F, 0x0171, 0x0171, 0x0173, 0x0173, 0x0175, 0x0175, 0x0177, 0x0177, 0x017A, 0x017A,
            0x017C, 0x017C, 0x017E, 0x0180, 0x0183, 0x0183, 0x0185, 0x0185, 0x0188, 0x0188, 0x018C, 0x018D,
            0x0192, 0x0192, 0x0195, 0x0195, 0x0199, 0x019B, 0x019E, 0x019E, 0x01A1, 0x01A1, 0x01A3, 0x01A3,
            0x01A5, 0x01A5, 0x01A8, 0x01A8, 0x01AA, 0x01AB, 0x01AD, 0x01AD, 0x01B0, 0x01B0, 0x01B4, 0x01B4,
            0x01B6, 0x01B6, 0x01B9, 0x01BA, 0x01BD, 0x01BF, 0x01C6, 0x01C6, 0x01C9, 0x01C9, 0x01CC, 0x01CC,
            0x01CE, 0x01CE, 0x01D0, 0x01D0, 0x01D2, 0x01D2, 0x01D4, 0x01D4, 0x01D6, 0x01D6, 0x01D8, 0x01D8,
            0x01DA, 0x01DA, 0x01DC, 0x01DD, 0x01DF, 0x01DF, 0x01E1, 0x01E1, 0x01E3, 0x01E3, 0x01E5, 0x01E5,
            0x01E7, 0x01E7, 0x01E9, 0x01E9, 0x01EB, 0x01EB, 0x01ED, 0x01ED, 0x01EF, 0x01F0, 0x01F3, 0x01F3,
            0x01F5, 0x01F5, 0x01FB, 0x01FB, 0x01FD, 0x01FD, 0x01FF, 0x01FF, 0x0201, 0x0201, 0x0203, 0x0203,
            0x0205, 0x0205, 0x0207, 0x0207, 0x0209, 0x0209, 0x020B, 0x020B, 0x020D, 0x020D, 0x020F, 0x020F,
            0x0211, 0x0211, 0x0213, 0x0213, 0x0215, 0x0215, 0x0217, 0x0217, 0x0250, 0x0293, 0x0295, 0x02A8,
            0x02B0, 0x02B8, 0x02C0, 0x02C1, 0x02E0, 0x02E4, 0x0345, 0x0345, 0x037A, 0x037A, 0x0390, 0x0390,
            0x03AC, 0x03CE, 0x03D0, 0x03D1, 0x03D5, 0x03D6, 0x03E3, 0x03E3, 0x03E5, 0x03E5, 0x03E7, 0x03E7,
            0x03E9, 0x03E9, 0x03EB, 0x03EB, 0x03ED, 0x03ED, 0x03EF, 0x03F3, 0x0430, 0x044F, 0x0451, 0x045C,
            0x045E, 0x045F, 0x0461, 0x0461, 0x0463, 0x0463, 0x0465, 0x0465, 0x0467, 0x0467, 0x0469, 0x0469,
            0x046B, 0x046B, 0x046D, 0x046D, 0x046F, 0x046F, 0x0471, 0x0471, 0x0473, 0x0473, 0x0475, 0x0475,
            0x0477, 0x0477, 0x0479, 0x0479, 0x047B, 0x047B, 0x047D, 0x047D, 0x047F, 0x047F, 0x0481, 0x0481,
            0x0491, 0x0491, 0x0493, 0x0493, 0x0495, 0x0495, 0x0497, 0x0497, 0x0499, 0x0499, 0x049B, 0x049B,
            0x049D, 0x049D, 0x049F, 0x049F, 0x04A1, 0x04A1, 0x04A3, 0x04A3, 0x04A5, 0x04A5, 0x04A7, 0x04A7,
            0x04A9, 0x04A9, 0x04AB, 0x04AB, 0x04AD, 0x04AD, 0x04AF, 0x04AF, 0x04B1, 0x04B1, 0x04B3, 0x04B3,
            0x04B5, 0x04B5, 0x04B7, 0x04B7, 0x04B9, 0x04B9, 0x04BB, 0x04BB, 0x04BD, 0x04BD, 0x04BF, 0x04BF,
            0x04C2, 0x04C2, 0x04C4, 0x04C4, 0x04C8, 0x04C8, 0x04CC, 0x04CC, 0x04D1, 0x04D1, 0x04D3, 0x04D3,
            0x04D5, 0x04D5, 0x04D7, 0x04D7, 0x04D9, 0x04D9, 0x04DB, 0x04DB, 0x04DD, 0x04DD, 0x04DF, 0x04DF,
            0x04E1, 0x04E1, 0x04E3, 0x04E3, 0x04E5, 0x04E5, 0x04E7, 0x04E7, 0x04E9, 0x04E9, 0x04EB, 0x04EB,
            0x04EF, 0x04EF, 0x04F1, 0x04F1, 0x04F3, 0x04F3, 0x04F5, 0x04F5, 0x04F9, 0x04F9, 0x0561, 0x0587,
            0x10D0, 0x10F6, 0x1E01, 0x1E01, 0x1E03, 0x1E03, 0x1E05, 0x1E05, 0x1E07, 0x1E07, 0x1E09, 0x1E09,
            0x1E0B, 0x1E0B, 0x1E0D, 0x1E0D, 0x1E0F, 0x1E0F, 0x1E11, 0x1E11, 0x1E13, 0x1E13, 0x1E15, 0x1E15,
            0x1E17, 0x1E17, 0x1E19, 0x1E19, 0x1E1B, 0x1E1B, 0x1E1D, 0x1E1D, 0x1E1F, 0x1E1F, 0x1E21, 0x1E21,
            0x1E23, 0x1E23, 0x1E25, 0x1E25, 0x1E27, 0x1E27, 0x1E29, 0x1E29, 0x1E2B, 0x1E2B, 0x1E2D, 0x1E2D,
            0x1E2F, 0x1E2F, 0x1E31, 0x1E31, 0x1E33, 0x1E33, 0x1E35, 0x1E35, 0x1E37, 0x1E37, 0x1E39, 0x1E39,
            0x1E3B, 0x1E3B, 0x1E3D, 0x1E3D, 0x1E3F, 0x1E3F, 0x1E41, 0x1E41, 0x1E43, 0x1E43, 0x1E45, 0x1E45,
            0x1E47, 0x1E47, 0x1E49, 0x1E49, 0x1E4B, 0x1E4B, 0x1E4D, 0x1E4D, 0x1E4F, 0x1E4F, 0x1E51, 0x1E51,
            0x1E53, 0x1E53, 0x1E55, 0x1E55, 0x1E57, 0x1E57, 0x1E59, 0x1E59, 0x1E5B, 0x1E5B, 0x1E5D, 0x1E5D,
            0x1E5F, 0x1E5F, 0x1E61, 0x1E61, 0x1E63, 0x1E63, 0x1E65, 0x1E65, 0x1E67, 0x1E67, 0x1E69, 0x1E69,
            0x1E6B, 0x1E6B, 0x1E6D, 0x1E6D, 0x1E6F, 0x1E6F, 0x1E71, 0x1E71, 0x1E73, 0x1E73, 0x1E75, 0x1E75,
            0x1E77, 0x1E77, 0x1E79, 0x1E79, 0x1E7B, 0x1E7B, 0x1E7D, 0x1E7D, 0x1E7F, 0x1E7F, 0x1E81, 0x1E81,
            0x1E83, 0x1E83, 0x1E85, 0x1E85, 0x1E87, 0x1E87, 0x1E89, 0x1E89, 0x1E8B, 0x1E8B, 0x1E8D, 0x1E8D,
            0x1E8F, 0x1E8F, 0x1E91, 0x1E91, 0x1E93, 0x1E93, 0x1E95, 0x1E9B, 0x1EA1, 0x1EA1, 0x1EA3, 0x1EA3,
            0x1EA5, 0x1EA5, 0x1EA7, 0x1EA7, 0x1EA9, 0x1EA9, 0x1EAB, 0x1EAB, 0x1EAD, 0x1EAD, 0x1EAF, 0x1EAF,
            0x1EB1, 0x1EB1, 0x1EB3, 0x1EB3, 0x1EB5, 0x1EB5, 0x1EB7, 0x1EB7, 0x1EB9, 0x1EB9, 0x1EBB, 0x1EBB,
            0x1EBD, 0x1EBD, 0x1EBF, 0x1EBF, 0x1EC1, 0x1EC1, 0x1EC3, 0x1EC3, 0x1EC5, 0x1EC5, 0x1EC7, 0x1EC7,
            0x1EC9, 0x1EC9, 0x1ECB, 0x1ECB, 0x1ECD, 0x1ECD, 0x1ECF, 0x1ECF, 0x1ED1, 0x1ED1, 0x1ED3, 0x1ED3,
            0x1ED5, 0x1ED5, 0x1ED7, 0x1ED7, 0x1ED9, 0x1ED9, 0x1EDB, 0x1EDB, 0x1EDD, 0x1EDD, 0x1EDF, 0x1EDF,
            0x1EE1, 0x1EE1, 0x1EE3, 0x1EE3, 0x1EE5, 0x1EE5, 0x1EE7, 0x1EE7, 0x1EE9, 0x1EE9, 0x1EEB, 0x1EEB,
            0x1EED, 0x1EED, 0x1EEF, 0x1EEF, 0x1EF1, 0x1EF1, 0x1EF3, 0x1EF3, 0x1EF5, 0x1EF5, 0x1EF7, 0x1EF7,
            0x1EF9, 0x1EF9, 0x1F00, 0x1F07, 0x1F10, 0x1F15, 0x1F20, 0x1F27, 0x1F30, 0x1F37, 0x1F40, 0x1F45,
            0x1F50, 0x1F57, 0x1F60, 0x1F67, 0x1F70, 0x1F7D, 0x1F80, 0x1F87, 0x1F90, 0x1F97, 0x1FA0, 0x1FA7,
            0x1FB0, 0x1FB4, 0x1FB6, 0x1FB7, 0x1FBE, 0x1FBE, 0x1FC2, 0x1FC4, 0x1FC6, 0x1FC7, 0x1FD0, 0x1FD3,
            0x1FD6, 0x1FD7, 0x1FE0, 0x1FE7, 0x1FF2, 0x1FF4, 0x1FF6, 0x1FF7, 0x207F, 0x207F, 0x210A, 0x210A,
            0x210E, 0x210F, 0x2113, 0x2113, 0x212F, 0x212F, 0x2134, 0x2134, 0x2170, 0x217F, 0x24D0, 0x24E9,
            0xFB00, 0xFB06, 0xFB13, 0xFB17, 0xFF41, 0xFF5A,
        ],
        // uppercase
        &[
            0x0041, 0x005A, 0x00C0, 0x00D6, 0x00D8, 0x00DE, 0x0100, 0x0100, 0x0102, 0x0102, 0x0104, 0x0104,
            0x0106, 0x0106, 0x0108, 0x0108, 0x010A, 0x010A, 0x010C, 0x010C, 0x010E, 0x010E, 0x0110, 0x0110,
            0x0112, 0x0112, 0x0114, 0x0114, 0x0116, 0x0116, 0x0118, 0x0118, 0x011A, 0x011A, 0x011C, 0x011C,
            0x011E, 0x011E, 0x0120, 0x0120, 0x0122, 0x0122, 0x0124, 0x0124, 0x0126, 0x0126, 0x0128, 0x0128,
            0x012A, 0x012A, 0x012C, 0x012C, 0x012E, 0x012E, 0x0130, 0x0130, 0x0132, 0x0132, 0x0134, 0x0134,
            0x0136, 0x0136, 0x0139, 0x0139, 0x013B, 0x013B, 0x013D, 0x013D, 0x013F, 0x013F, 0x0141, 0x0141,
            0x0143, 0x0143, 0x0145, 0x0145, 0x0147, 0x0147, 0x014A, 0x014A, 0x014C, 0x014C, 0x014E, 0x014E,
            0x0150, 0x0150, 0x0152, 0x0152, 0x0154, 0x0154, 0x0156, 0x0156, 0x0158, 0x0158, 0x015A, 0x015A,
            0x015C, 0x015C, 0x015E, 0x015E, 0x0160, 0x0160, 0x0162, 0x0162, 0x0164, 0x0164, 0x0166, 0x0166,
            0x0168, 0x0168, 0x016A, 0x016A, 0x016C, 0x016C, 0x016E, 0x016E, 0x0170, 0x0170, 0x0172, 0x0172,
            0x0174, 0x0174, 0x0176, 0x0176, 0x0178, 0x0179, 0x017B, 0x017B, 0x017D, 0x017D, 0x0181, 0x0182,
            0x0184, 0x0184, 0x0186, 0x0187, 0x0189, 0x018B, 0x018E, 0x0191, 0x0193, 0x0194, 0x0196, 0x0198,
            0x019C, 0x019D, 0x019F, 0x01A0, 0x01A2, 0x01A2, 0x01A4, 0x01A4, 0x01A6, 0x01A7, 0x01A9, 0x01A9,
            0x01AC, 0x01AC, 0x01AE, 0x01AF, 0x01B1, 0x01B3, 0x01B5, 0x01B5, 0x01B7, 0x01B8, 0x01BC, 0x01BC,
            0x01C4, 0x01C4, 0x01C7, 0x01C7, 0x01CA, 0x01CA, 0x01CD, 0x01CD, 0x01CF, 0x01CF, 0x01D1, 0x01D1,
            0x01D3, 0x01D3, 0x01D5, 0x01D5, 0x01D7, 0x01D7, 0x01D9, 0x01D9, 0x01DB, 0x01DB, 0x01DE, 0x01DE,
            0x01E0, 0x01E0, 0x01E2, 0x01E2, 0x01E4, 0x01E4, 0x01E6, 0x01E6, 0x01E8, 0x01E8, 0x01EA, 0x01EA,
            0x01EC, 0x01EC, 0x01EE, 0x01EE, 0x01F1, 0x01F1, 0x01F4, 0x01F4, 0x01FA, 0x01FA, 0x01FC, 0x01FC,
            0x01FE, 0x01FE, 0x0200, 0x0200, 0x0202, 0x0202, 0x0204, 0x0204, 0x0206, 0x0206, 0x0208, 0x0208,
            0x020A, 0x020A, 0x020C, 0x020C, 0x020E, 0x020E, 0x0210, 0x0210, 0x0212, 0x0212, 0x0214, 0x0214,
            0x0216, 0x0216, 0x0386, 0x0386, 0x0388, 0x038A, 0x038C, 0x038C, 0x038E, 0x038F, 0x0391, 0x03A1,
            0x03A3, 0x03AB, 0x03D2, 0x03D4, 0x03DA, 0x03DA, 0x03DC, 0x03DC, 0x03DE, 0x03DE, 0x03E0, 0x03E0,
            0x03E2, 0x03E2, 0x03E4, 0x03E4, 0x03E6, 0x03E6, 0x03E8, 0x03E8, 0x03EA, 0x03EA, 0x03EC, 0x03EC,
            0x03EE, 0x03EE, 0x0401, 0x040C, 0x040E, 0x042F, 0x0460, 0x0460, 0x0462, 0x0462, 0x0464, 0x0464,
            0x0466, 0x0466, 0x0468, 0x0468, 0x046A, 0x046A, 0x046C, 0x046C, 0x046E, 0x046E, 0x0470, 0x0470,
            0x0472, 0x0472, 0x0474, 0x0474, 0x0476, 0x0476, 0x0478, 0x0478, 0x047A, 0x047A, 0x047C, 0x047C,
            0x047E, 0x047E, 0x0480, 0x0480, 0x0490, 0x0490, 0x0492, 0x0492, 0x0494, 0x0494, 0x0496, 0x0496,
            0x0498, 0x0498, 0x049A, 0x049A, 0x049C, 0x049C, 0x049E, 0x049E, 0x04A0, 0x04A0, 0x04A2, 0x04A2,
            0x04A4, 0x04A4, 0x04A6, 0x04A6, 0x04A8, 0x04A8, 0x04AA, 0x04AA, 0x04AC, 0x04AC, 0x04AE, 0x04AE,
            0x04B0, 0x04B0, 0x04B2, 0x04B2, 0x04B4, 0x04B4, 0x04B6, 0x04B6, 0x04B8, 0x04B8, 0x04BA, 0x04BA,
            0x04BC, 0x04BC, 0x04BE, 0x04BE, 0x04C0, 0x04C1, 0x04C3, 0x04C3, 0x04C7, 0x04C7, 0x04CB, 0x04CB,
            0x04D0, 0x04D0, 0x04D2, 0x04D2, 0x04D4, 0x04D4, 0x04D6, 0x04D6, 0x04D8, 0x04D8, 0x04DA, 0x04DA,
            0x04DC, 0x04DC, 0x04DE, 0x04DE, 0x04E0, 0x04E0, 0x04E2, 0x04E2, 0x04E4, 0x04E4, 0x04E6, 0x04E6,
            0x04E8, 0x04E8, 0x04EA, 0x04EA, 0x04EE, 0x04EE, 0x04F0, 0x04F0, 0x04F2, 0x04F2, 0x04F4, 0x04F4,
            0x04F8, 0x04F8, 0x0531, 0x0556, 0x10A0, 0x10C5, 0x1E00, 0x1E00, 0x1E02, 0x1E02, 0x1E04, 0x1E04,
            0x1E06, 0x1E06, 0x1E08, 0x1E08, 0x1E0A, 0x1E0A, 0x1E0C, 0x1E0C, 0x1E0E, 0x1E0E, 0x1E10, 0x1E10,
            0x1E12, 0x1E12, 0x1E14, 0x1E14, 0x1E16, 0x1E16, 0x1E18, 0x1E18, 0x1E1A, 0x1E1A, 0x1E1C, 0x1E1C,
            0x1E1E, 0x1E1E, 0x1E20, 0x1E20, 0x1E22, 0x1E22, 0x1E24, 0x1E24, 0x1E26, 0x1E26, 0x1E28, 0x1E28,
            0x1E2A, 0x1E2A, 0x1E2C, 0x1E2C, 0x1E2E, 0x1E2E, 0x1E30, 0x1E30, 0x1E32, 0x1E32, 0x1E34, 0x1E34,
            0x1E36, 0x1E36, 0x1E38, 0x1E38, 0x1E3A, 0x1E3A, 0x1E3C, 0x1E3C, 0x1E3E, 0x1E3E, 0x1E40, 0x1E40,
            0x1E42, 0x1E42, 0x1E44, 0x1E44, 0x1E46, 0x1E46, 0x1E48, 0x1E48, 0x1E4A, 0x1E4A, 0x1E4C, 0x1E4C,
            0x1E4E, 0x1E4E, 0x1E50, 0x1E50, 0x1E52, 0x1E52, 0x1E54, 0x1E54, 0x1E56, 0x1E56, 0x1E58, 0x1E58,
            0x1E5A, 0x1E5A, 0x1E5C, 0x1E5C, 0x1E5E, 0x1E5E, 0x1E60, 0x1E60, 0x1E62, 0x1E62, 0x1E64, 0x1E64,
            0x1E66, 0x1E66, 0x1E68, 0x1E68, 0x1E6A, 0x1E6A, 0x1E6C, 0x1E6C, 0x1E6E, 0x1E6E, 0x1E70, 0x1E70,
            0x1E72, 0x1E72, 0x1E74, 0x1E74, 0x1E76, 0x1E76, 0x1E78, 0x1E78, 0x1E7A, 0x1E7A, 0x1E7C, 0x1E7C,
            0x1E7E, 0x1E7E, 0x1E80, 0x1E80, 0x1E82, 0x1E82, 0x1E84, 0x1E84, 0x1E86, 0x1E86, 0x1E88, 0x1E88,
            0x1E8A, 0x1E8A, 0x1E8C, 0x1E8C, 0x1E8E, 0x1E8E, 0x1E90, 0x1E90, 0x1E92, 0x1E92, 0x1E94, 0x1E94,
            0x1EA0, 0x1EA0, 0x1EA2, 0x1EA2, 0x1EA4, 0x1EA4, 0x1EA6, 0x1EA6, 0x1EA8, 0x1EA8, 0x1EAA, 0x1EAA,
            0x1EAC, 0x1EAC, 0x1EAE, 0x1EAE, 0x1EB0, 0x1EB0, 0x1EB2, 0x1EB2, 0x1EB4, 0x1EB4, 0x1EB6, 0x1EB6,
            0x1EB8, 0x1EB8, 0x1EBA, 0x1EBA, 0x1EBC, 0x1EBC, 0x1EBE, 0x1EBE, 0x1EC0, 0x1EC0, 0x1EC2, 0x1EC2,
            0x1EC4, 0x1EC4, 0x1EC6, 0x1EC6, 0x1EC8, 0x1EC8, 0x1ECA, 0x1ECA, 0x1ECC, 0x1ECC, 0x1ECE, 0x1ECE,
            0x1ED0, 0x1ED0, 0x1ED2, 0x1ED2, 0x1ED4, 0x1ED4, 0x1ED6, 0x1ED6, 0x1ED8, 0x1ED8, 0x1EDA, 0x1EDA,
            0x1EDC, 0x1EDC, 0x1EDE, 0x1EDE, 0x1EE0, 0x1EE0, 0x1EE2, 0x1EE2, 0x1EE4, 0x1EE4, 0x1EE6, 0x1EE6,
            0x1EE8, 0x1EE8, 0x1EEA, 0x1EEA, 0x1EEC, 0x1EEC, 0x1EEE, 0x1EEE, 0x1EF0, 0x1EF0, 0x1EF2, 0x1EF2,
            0x1EF4, 0x1EF4, 0x1EF6, 0x1EF6, 0x1EF8, 0x1EF8, 0x1F08, 0x1F0F, 0x1F18, 0x1F1D, 0x1F28, 0x1F2F,
            0x1F38, 0x1F3F, 0x1F48, 0x1F4D, 0x1F59, 0x1F59, 0x1F5B, 0x1F5B, 0x1F5D, 0x1F5D, 0x1F5F, 0x1F5F,
            0x1F68, 0x1F6F, 0x1FB8, 0x1FBB, 0x1FC8, 0x1FCB, 0x1FD8, 0x1FDB, 0x1FE8, 0x1FEC, 0x1FF8, 0x1FFB,
            0x2102, 0x2102, 0x2107, 0x2107, 0x210B, 0x210D, 0x2110, 0x2112, 0x2115, 0x2115, 0x2119, 0x211D,
            0x2124, 0x2124, 0x2126, 0x2126, 0x2128, 0x2128, 0x212A, 0x212D, 0x2130, 0x2133, 0x2160, 0x216F,
            0x24B6, 0x24CF, 0xFF21, 0xFF3A,
        ],
        // whitespace
        &[
            0x0009, 0x000D, 0x0020, 0x0020, 0x0085, 0x0085, 0x00A0, 0x00A0, 0x2000, 0x200A, 0x2028, 0x2029,
            0x3000, 0x3000,
        ],
    ],
    property_value_aliases: &[
        ("uppercaseletter", "lu"),
        ("lowercaseletter", "ll"),
        ("titlecaseletter", "lt"),
        ("modifierletter", "lm"),
        ("otherletter", "lo"),
        ("nonspacingmark", "mn"),
        ("spacingmark", "mc"),
        ("enclosingmark", "me"),
        ("decimalnumber", "nd"),
        ("digit", "nd"),
        ("letternumber", "nl"),
        ("othernumber", "no"),
        ("connectorpunctuation", "pc"),
        ("dashpunctuation", "pd"),
        ("openpunctuation", "ps"),
        ("closepunctuation", "pe"),
        ("initialpunctuation", "pi"),
        ("finalpunctuation", "pf"),
        ("otherpunctuation", "po"),
        ("mathsymbol", "sm"),
        ("currencysymbol", "sc"),
        ("modifiersymbol", "sk"),
        ("othersymbol", "so"),
        ("spaceseparator", "zs"),
        ("lineseparator", "zl"),
        ("paragraphseparator", "zp"),
        ("control", "cc"),
        ("cntrl", "cc"),
        ("format", "cf"),
        ("surrogate", "cs"),
        ("privateuse", "co"),
        ("unassigned", "cn"),
        ("letter", "l"),
        ("mark", "m"),
        ("number", "n"),
        ("punctuation", "p"),
        ("symbol", "s"),
        ("separator", "z"),
        ("other", "c"),
        ("casedletter", "lc"),
        ("combiningmark", "m"),
        ("punct", "p"),
        ("gc=lu", "lu"),
        ("generalcategory=lu", "lu"),
        ("gc=ll", "ll"),
        ("generalcategory=ll", "ll"),
        ("gc=lt", "lt"),
        ("generalcategory=lt", "lt"),
        ("gc=lm", "lm"),
        ("generalcategory=lm", "lm"),
        ("gc=lo", "lo"),
        ("generalcategory=lo", "lo"),
        ("gc=mn", "mn"),
        ("generalcategory=mn", "mn"),
        ("gc=mc", "mc"),
        ("generalcategory=mc", "mc"),
        ("gc=me", "me"),
        ("generalcategory=me", "me"),
        ("gc=nd", "nd"),
        ("generalcategory=nd", "nd"),
        ("gc=nl", "nl"),
        ("generalcategory=nl", "nl"),
        ("gc=no", "no"),
        ("generalcategory=no", "no"),
        ("gc=pc", "pc"),
        ("generalcategory=pc", "pc"),
        ("gc=pd", "pd"),
        ("generalcategory=pd", "pd"),
        ("gc=ps", "ps"),
        ("generalcategory=ps", "ps"),
        ("gc=pe", "pe"),
        ("generalcategory=pe", "pe"),
        ("gc=pi", "pi"),
        ("generalcategory=pi", "pi"),
        ("gc=pf", "pf"),
        ("generalcategory=pf", "pf"),
        ("gc=po", "po"),
        ("generalcategory=po", "po"),
        ("gc=sm", "sm"),
        ("generalcategory=sm", "sm"),
        ("gc=sc", "sc"),
        ("generalcategory=sc", "sc"),
        ("gc=sk", "sk"),
        ("generalcategory=sk", "sk"),
        ("gc=so", "so"),
        ("generalcategory=so", "so"),
        ("gc=zs", "zs"),
        ("generalcategory=zs", "zs"),
        ("gc=zl", "zl"),
        ("generalcategory=zl", "zl"),
        ("gc=zp", "zp"),
        ("generalcategory=zp", "zp"),
        ("gc=cc", "cc"),
        ("generalcategory=cc", "cc"),
        ("gc=cf", "cf"),
        ("generalcategory=cf", "cf"),
        ("gc=cs", "cs"),
        ("generalcategory=cs", "cs"),
        ("gc=co", "co"),
        ("generalcategory=co", "co"),
        ("gc=cn", "cn"),
        ("generalcategory=cn", "cn"),
        ("gc=l", "l"),
        ("generalcategory=l", "l"),
        ("gc=m", "m"),
        ("generalcategory=m", "m"),
        ("gc=n", "n"),
        ("generalcategory=n", "n"),
        ("gc=p", "p"),
        ("generalcategory=p", "p"),
        ("gc=s", "s"),
        ("generalcategory=s", "s"),
        ("gc=z", "z"),
        ("generalcategory=z", "z"),
        ("gc=c", "c"),
        ("generalcategory=c", "c"),
        ("gc=lc", "lc"),
        ("generalcategory=lc", "lc"),
        ("sc=arabic", "arabic"),
        ("script=arabic", "arabic"),
        ("arab", "arabic"),
        ("sc=arab", "arabic"),
        ("script=arab", "arabic"),
        ("armn", "armenian"),
        ("sc=armn", "armenian"),
        ("script=armn", "armenian"),
        ("sc=armenian", "armenian"),
        ("script=armenian", "armenian"),
        ("beng", "bengali"),
        ("sc=beng", "bengali"),
        ("script=beng", "bengali"),
        ("sc=bengali", "bengali"),
        ("script=bengali", "bengali"),
        ("bopo", "bopomofo"),
        ("sc=bopo", "bopomofo"),
        ("script=bopo", "bopomofo"),
        ("sc=bopomofo", "bopomofo"),
        ("script=bopomofo", "bopomofo"),
        ("copt", "coptic"),
        ("sc=copt", "coptic"),
        ("script=copt", "coptic"),
        ("sc=coptic", "coptic"),
        ("script=coptic", "coptic"),
        ("qaac", "coptic"),
        ("sc=qaac", "coptic"),
        ("script=qaac", "coptic"),
        ("cyrl", "cyrillic"),
        ("sc=cyrl", "cyrillic"),
        ("script=cyrl", "cyrillic"),
        ("sc=cyrillic", "cyrillic"),
        ("script=cyrillic", "cyrillic"),
        ("deva", "devanagari"),
        ("sc=deva", "devanagari"),
        ("script=deva", "devanagari"),
        ("sc=devanagari", "devanagari"),
        ("script=devanagari", "devanagari"),
        ("sc=georgian", "georgian"),
        ("script=georgian", "georgian"),
        ("geor", "georgian"),
        ("sc=geor", "georgian"),
        ("script=geor", "georgian"),
        ("grek", "greek"),
        ("sc=grek", "greek"),
        ("script=grek", "greek"),
        ("sc=greek", "greek"),
        ("script=greek", "greek"),
        ("gujr", "gujarati"),
        ("sc=gujr", "gujarati"),
        ("script=gujr", "gujarati"),
        ("sc=gujarati", "gujarati"),
        ("script=gujarati", "gujarati"),
        ("sc=gurmukhi", "gurmukhi"),
        ("script=gurmukhi", "gurmukhi"),
        ("guru", "gurmukhi"),
        ("sc=guru", "gurmukhi"),
        ("script=guru", "gurmukhi"),
        ("hang", "hangul"),
        ("sc=hang", "hangul"),
        ("script=hang", "hangul"),
        ("sc=hangul", "hangul"),
        ("script=hangul", "hangul"),
        ("hani", "han"),
        ("sc=hani", "han"),
        ("script=hani", "han"),
        ("sc=han", "han"),
        ("script=han", "han"),
        ("sc=hebrew", "hebrew"),
        ("script=hebrew", "hebrew"),
        ("hebr", "hebrew"),
        ("sc=hebr", "hebrew"),
        ("script=hebr", "hebrew"),
        ("sc=hiragana", "hiragana"),
        ("script=hiragana", "hiragana"),
        ("hira", "hiragana"),
        ("sc=hira", "hiragana"),
        ("script=hira", "hiragana"),
        ("sc=katakana", "katakana"),
        ("script=katakana", "katakana"),
        ("kana", "katakana"),
        ("sc=kana", "katakana"),
        ("script=kana", "katakana"),
        ("sc=kannada", "kannada"),
        ("script=kannada", "kannada"),
        ("knda", "kannada"),
        ("sc=knda", "kannada"),
        ("script=knda", "kannada"),
        ("laoo", "lao"),
        ("sc=laoo", "lao"),
        ("script=laoo", "lao"),
        ("sc=lao", "lao"),
        ("script=lao", "lao"),
        ("latn", "latin"),
        ("sc=latn", "latin"),
        ("script=latn", "latin"),
        ("sc=latin", "latin"),
        ("script=latin", "latin"),
        ("sc=malayalam", "malayalam"),
        ("script=malayalam", "malayalam"),
        ("mlym", "malayalam"),
        ("sc=mlym", "malayalam"),
        ("script=mlym", "malayalam"),
        ("sc=oriya", "oriya"),
        ("script=oriya", "oriya"),
        ("orya", "oriya"),
        ("sc=orya", "oriya"),
        ("script=orya", "oriya"),
        ("sc=tamil", "tamil"),
        ("script=tamil", "tamil"),
        ("taml", "tamil"),
        ("sc=taml", "tamil"),
        ("script=taml", "tamil"),
        ("telu", "telugu"),
        ("sc=telu", "telugu"),
        ("script=telu", "telugu"),
        ("sc=telugu", "telugu"),
        ("script=telugu", "telugu"),
        ("sc=thai", "thai"),
        ("script=thai", "thai"),
        ("tibt", "tibetan"),
        ("sc=tibt", "tibetan"),
        ("script=tibt", "tibetan"),
        ("sc=tibetan", "tibetan"),
        ("script=tibetan", "tibetan"),
        ("sc=inherited", "inherited"),
        ("script=inherited", "inherited"),
        ("zinh", "inherited"),
        ("sc=zinh", "inherited"),
        ("script=zinh", "inherited"),
        ("qaai", "inherited"),
        ("sc=qaai", "inherited"),
        ("script=qaai", "inherited"),
        ("sc=common", "common"),
        ("script=common", "common"),
        ("zyyy", "common"),
        ("sc=zyyy", "common"),
        ("script=zyyy", "common"),
        ("alpha", "alphabetic"),
        ("lower", "lowercase"),
        ("upper", "uppercase"),
        ("wspace", "whitespace"),
        ("space", "whitespace"),
    ],
    caseless_match_partitions: &[
        0x0041, 0x0061, 0x0000, 0x0000, 0x0042, 0x0062, 0x0000, 0x0000, 0x0043, 0x0063, 0x0000, 0x0000,
        0x0044, 0x0064, 0x0000, 0x0000, 0x0045, 0x0065, 0x0000, 0x0000, 0x0046, 0x0066, 0x0000, 0x0000,
        0x0047, 0x0067, 0x0000, 0x0000, 0x0048, 0x0068, 0x0000, 0x0000, 0x0049, 0x0069, 0x0130, 0x0131,
        0x004A, 0x006A, 0x0000, 0x0000, 0x004B, 0x006B, 0x212A, 0x0000, 0x004C, 0x006C, 0x0000, 0x0000,
        0x004D, 0x006D, 0x0000, 0x0000, 0x004E, 0x006E, 0x0000, 0x0000, 0x004F, 0x006F, 0x0000, 0x0000,
        0x0050, 0x0070, 0x0000, 0x0000, 0x0051, 0x0071, 0x0000, 0x0000, 0x0052, 0x0072, 0x0000, 0x0000,
        0x0053, 0x0073, 0x017F, 0x0000, 0x0054, 0x0074, 0x0000, 0x0000, 0x0055, 0x0075, 0x0000, 0x0000,
        0x0056, 0x0076, 0x0000, 0x0000, 0x0057, 0x0077, 0x0000, 0x0000, 0x0058, 0x0078, 0x0000, 0x0000,
        0x0059, 0x0079, 0x0000, 0x0000, 0x005A, 0x007A, 0x0000, 0x0000, 0x00B5, 0x039C, 0x03BC, 0x0000,
        0x00C0, 0x00E0, 0x0000, 0x0000, 0x00C1, 0x00E1, 0x0000, 0x0000, 0x00C2, 0x00E2, 0x0000, 0x0000,
        0x00C3, 0x00E3, 0x0000, 0x0000, 0x00C4, 0x00E4, 0x0000, 0x0000, 0x00C5, 0x00E5, 0x212B, 0x0000,
        0x00C6, 0x00E6, 0x0000, 0x0000, 0x00C7, 0x00E7, 0x0000, 0x0000, 0x00C8, 0x00E8, 0x0000, 0x0000,
        0x00C9, 0x00E9, 0x0000, 0x0000, 0x00CA, 0x00EA, 0x0000, 0x0000, 0x00CB, 0x00EB, 0x0000, 0x0000,
        0x00CC, 0x00EC, 0x0000, 0x0000, 0x00CD, 0x00ED, 0x0000, 0x0000, 0x00CE, 0x00EE, 0x0000, 0x0000,
        0x00CF, 0x00EF, 0x0000, 0x0000, 0x00D0, 0x00F0, 0x0000, 0x0000, 0x00D1, 0x00F1, 0x0000, 0x0000,
        0x00D2, 0x00F2, 0x0000, 0x0000, 0x00D3, 0x00F3, 0x0000, 0x0000, 0x00D4, 0x00F4, 0x0000, 0x0000,
        0x00D5, 0x00F5, 0x0000, 0x0000, 0x00D6, 0x00F6, 0x0000, 0x0000, 0x00D8, 0x00F8, 0x0000, 0x0000,
        0x00D9, 0x00F9, 0x0000, 0x0000, 0x00DA, 0x00FA, 0x0000, 0x0000, 0x00DB, 0x00FB, 0x0000, 0x0000,
        0x00DC, 0x00FC, 0x0000, 0x0000, 0x00DD, 0x00FD, 0x0000, 0x0000, 0x00DE, 0x00FE, 0x0000, 0x0000,
        0x00FF, 0x0178, 0x0000, 0x0000, 0x0100, 0x0101, 0x0000, 0x0000, 0x0102, 0x0103, 0x0000, 0x0000,
        0x0104, 0x0105, 0x0000, 0x0000, 0x0106, 0x0107, 0x0000, 0x0000, 0x0108, 0x0109, 0x0000, 0x0000,
        0x010A, 0x010B, 0x0000, 0x0000, 0x010C, 0x010D, 0x0000, 0x0000, 0x010E, 0x010F, 0x0000, 0x0000,
        0x0110, 0x0111, 0x0000, 0x0000, 0x0112, 0x0113, 0x0000, 0x0000, 0x0114, 0x0115, 0x0000, 0x0000,
        0x0116, 0x0117, 0x0000, 0x0000, 0x0118, 0x0119, 0x0000, 0x0000, 0x011A, 0x011B, 0x0000, 0x0000,
        0x011C, 0x011D, 0x0000, 0x0000, 0x011E, 0x011F, 0x0000, 0x0000, 0x0120, 0x0121, 0x0000, 0x0000,
        0x0122, 0x0123, 0x0000, 0x0000, 0x0124, 0x0125, 0x0000, 0x0000, 0x0126, 0x0127, 0x0000, 0x0000,
        0x0128, 0x0129, 0x0000, 0x0000, 0x012A, 0x012B, 0x0000, 0x0000, 0x012C, 0x012D, 0x0000, 0x0000,
        0x012E, 0x012F, 0x0000, 0x0000, 0x0132, 0x0133, 0x0000, 0x0000, 0x0134, 0x0135, 0x0000, 0x0000,
        0x0136, 0x0137, 0x0000, 0x0000, 0x0139, 0x013A, 0x0000, 0x0000, 0x013B, 0x013C, 0x0000, 0x0000,
        0x013D, 0x013E, 0x0000, 0x0000, 0x013F, 0x0140, 0x0000, 0x0000, 0x0141, 0x0142, 0x0000, 0x0000,
        0x0143, 0x0144, 0x0000, 0x0000, 0x0145, 0x0146, 0x0000, 0x0000, 0x0147, 0x0148, 0x0000, 0x0000,
        0x014A, 0x014B, 0x0000, 0x0000, 0x014C, 0x014D, 0x0000, 0x0000, 0x014E, 0x014F, 0x0000, 0x0000,
        0x0150, 0x0151, 0x0000, 0x0000, 0x0152, 0x0153, 0x0000, 0x0000, 0x0154, 0x0155, 0x0000, 0x0000,
        0x0156, 0x0157, 0x0000, 0x0000, 0x0158, 0x0159, 0x0000, 0x0000, 0x015A, 0x015B, 0x0000, 0x0000,
        0x015C, 0x015D, 0x0000, 0x0000, 0x015E, 0x015F, 0x0000, 0x0000, 0x0160, 0x0161, 0x0000, 0x0000,
        0x0162, 0x0163, 0x0000, 0x0000, 0x0164, 0x0165, 0x0000, 0x0000, 0x0166, 0x0167, 0x0000, 0x0000,
        0x0168, 0x0169, 0x0000, 0x0000, 0x016A, 0x016B, 0x0000, 0x0000, 0x016C, 0x016D, 0x0000, 0x0000,
        0x016E, 0x016F, 0x0000, 0x0000, 0x0170, 0x0171, 0x0000, 0x0000, 0x0172, 0x0173, 0x0000, 0x0000,
        0x0174, 0x0175, 0x0000, 0x0000, 0x0176, 0x0177, 0x0000, 0x0000, 0x0179, 0x017A, 0x0000, 0x0000,
        0x017B, 0x017C, 0x0000, 0x0000, 0x017D, 0x017E, 0x0000, 0x0000, 0x0181, 0x0253, 0x0000, 0x0000,
        0x0182, 0x0183, 0x0000, 0x0000, 0x0184, 0x0185, 0x0000, 0x0000, 0x0186, 0x0254, 0x0000, 0x0000,
        0x0187, 0x0188, 0x0000, 0x0000, 0x0189, 0x0256, 0x0000, 0x0000, 0x018A, 0x0257, 0x0000, 0x0000,
        0x018B, 0x018C, 0x0000, 0x0000, 0x018E, 0x01DD, 0x0000, 0x0000, 0x018F, 0x0259, 0x0000, 0x0000,
        0x0190, 0x025B, 0x0000, 0x0000, 0x0191, 0x0192, 0x0000, 0x0000, 0x0193, 0x0260, 0x0000, 0x0000,
        0x0194, 0x0263, 0x0000, 0x0000, 0x0196, 0x0269, 0x0000, 0x0000, 0x0197, 0x0268, 0x0000, 0x0000,
        0x0198, 0x0199, 0x0000, 0x0000, 0x019C, 0x026F, 0x0000, 0x0000, 0x019D, 0x0272, 0x0000, 0x0000,
        0x019F, 0x0275, 0x0000, 0x0000, 0x01A0, 0x01A1, 0x0000, 0x0000, 0x01A2, 0x01A3, 0x0000, 0x0000,
        0x01A4, 0x01A5, 0x0000, 0x0000, 0x01A6, 0x0280, 0x0000, 0x0000, 0x01A7, 0x01A8, 0x0000, 0x0000,
        0x01A9, 0x0283, 0x0000, 0x0000, 0x01AC, 0x01AD, 0x0000, 0x0000, 0x01AE, 0x0288, 0x0000, 0x0000,
        0x01AF, 0x01B0, 0x0000, 0x0000, 0x01B1, 0x028A, 0x0000, 0x0000, 0x01B2, 0x028B, 0x0000, 0x0000,
        0x01B3, 0x01B4, 0x0000, 0x0000, 0x01B5, 0x01B6, 0x0000, 0x0000, 0x01B7, 0x0292, 0x0000, 0x0000,
        0x01B8, 0x01B9, 0x0000, 0x0000, 0x01BC, 0x01BD, 0x0000, 0x0000, 0x01C4, 0x01C5, 0x01C6, 0x0000,
        0x01C7, 0x01C8, 0x01C9, 0x0000, 0x01CA, 0x01CB, 0x01CC, 0x0000, 0x01CD, 0x01CE, 0x0000, 0x0000,
        0x01CF, 0x01D0, 0x0000, 0x0000, 0x01D1, 0x01D2, 0x0000, 0x0000, 0x01D3, 0x01D4, 0x0000, 0x0000,
        0x01D5, 0x01D6, 0x0000, 0x0000, 0x01D7, 0x01D8, 0x0000, 0x0000, 0x01D9, 0x01DA, 0x0000, 0x0000,
        0x01DB, 0x01DC, 0x0000, 0x0000, 0x01DE, 0x01DF, 0x0000, 0x0000, 0x01E0, 0x01E1, 0x0000, 0x0000,
        0x01E2, 0x01E3, 0x0000, 0x0000, 0x01E4, 0x01E5, 0x0000, 0x0000, 0x01E6, 0x01E7, 0x0000, 0x0000,
        0x01E8, 0x01E9, 0x0000, 0x0000, 0x01EA, 0x01EB, 0x0000, 0x0000, 0x01EC, 0x01ED, 0x0000, 0x0000,
        0x01EE, 0x01EF, 0x0000, 0x0000, 0x01F1, 0x01F2, 0x01F3, 0x0000, 0x01F4, 0x01F5, 0x0000, 0x0000,
        0x01FA, 0x01FB, 0x0000, 0x0000, 0x01FC, 0x01FD, 0x0000, 0x0000, 0x01FE, 0x01FF, 0x0000, 0x0000,
        0x0200, 0x0201, 0x0000, 0x0000, 0x0202, 0x0203, 0x0000, 0x0000, 0x0204, 0x0205, 0x0000, 0x0000,
        0x0206, 0x0207, 0x0000, 0x0000, 0x0208, 0x0209, 0x0000, 0x0000, 0x020A, 0x020B, 0x0000, 0x0000,
        0x020C, 0x020D, 0x0000, 0x0000, 0x020E, 0x020F, 0x0000, 0x0000, 0x0210, 0x0211, 0x0000, 0x0000,
        0x0212, 0x0213, 0x0000, 0x0000, 0x0214, 0x0215, 0x0000, 0x0000, 0x0216, 0x0217, 0x0000, 0x0000,
        0x0345, 0x0399, 0x03B9, 0x1FBE, 0x0386, 0x03AC, 0x0000, 0x0000, 0x0388, 0x03AD, 0x0000, 0x0000,
        0x0389, 0x03AE, 0x0000, 0x0000, 0x038A, 0x03AF, 0x0000, 0x0000, 0x038C, 0x03CC, 0x0000, 0x0000,
        0x038E, 0x03CD, 0x0000, 0x0000, 0x038F, 0x03CE, 0x0000, 0x0000, 0x0391, 0x03B1, 0x0000, 0x0000,
        0x0392, 0x03B2, 0x03D0, 0x0000, 0x0393, 0x03B3, 0x0000, 0x0000, 0x0394, 0x03B4, 0x0000, 0x0000,
        0x0395, 0x03B5, 0x0000, 0x0000, 0x0396, 0x03B6, 0x0000, 0x0000, 0x0397, 0x03B7, 0x0000, 0x0000,
        0x0398, 0x03B8, 0x03D1, 0x0000, 0x039A, 0x03BA, 0x03F0, 0x0000, 0x039B, 0x03BB, 0x0000, 0x0000,
        0x039D, 0x03BD, 0x0000, 0x0000, 0x039E, 0x03BE, 0x0000, 0x0000, 0x039F, 0x03BF, 0x0000, 0x0000,
        0x03A0, 0x03C0, 0x03D6, 0x0000, 0x03A1, 0x03C1, 0x03F1, 0x0000, 0x03A3, 0x03C2, 0x03C3, 0x0000,
        0x03A4, 0x03C4, 0x0000, 0x0000, 0x03A5, 0x03C5, 0x0000, 0x0000, 0x03A6, 0x03C6, 0x03D5, 0x0000,
        0x03A7, 0x03C7, 0x0000, 0x0000, 0x03A8, 0x03C8, 0x0000, 0x0000, 0x03A9, 0x03C9, 0x2126, 0x0000,
        0x03AA, 0x03CA, 0x0000, 0x0000, 0x03AB, 0x03CB, 0x0000, 0x0000, 0x03E2, 0x03E3, 0x0000, 0x0000,
        0x03E4, 0x03E5, 0x0000, 0x0000, 0x03E6, 0x03E7, 0x0000, 0x0000, 0x03E8, 0x03E9, 0x0000, 0x0000,
        0x03EA, 0x03EB, 0x0000, 0x0000, 0x03EC, 0x03ED, 0x0000, 0x0000, 0x03EE, 0x03EF, 0x0000, 0x0000,
        0x0401, 0x0451, 0x0000, 0x0000, 0x0402, 0x0452, 0x0000, 0x0000, 0x0403, 0x0453, 0x0000, 0x0000,
        0x0404, 0x0454, 0x0000, 0x0000, 0x0405, 0x0455, 0x0000, 0x0000, 0x0406, 0x0456, 0x0000, 0x0000,
        0x0407, 0x0457, 0x0000, 0x0000, 0x0408, 0x0458, 0x0000, 0x0000, 0x0409, 0x0459, 0x0000, 0x0000,
        0x040A, 0x045A, 0x0000, 0x0000, 0x040B, 0x045B, 0x0000, 0x0000, 0x040C, 0x045C, 0x0000, 0x0000,
        0x040E, 0x045E, 0x0000, 0x0000, 0x040F, 0x045F, 0x0000, 0x0000, 0x0410, 0x0430, 0x0000, 0x0000,
        0x0411, 0x0431, 0x0000, 0x0000, 0x0412, 0x0432, 0x0000, 0x0000, 0x0413, 0x0433, 0x0000, 0x0000,
        0x0414, 0x0434, 0x0000, 0x0000, 0x0415, 0x0435, 0x0000, 0x0000, 0x0416, 0x0436, 0x0000, 0x0000,
        0x0417, 0x0437, 0x0000, 0x0000, 0x0418, 0x0438, 0x0000, 0x0000, 0x0419, 0x0439, 0x0000, 0x0000,
        0x041A, 0x043A, 0x0000, 0x0000, 0x041B, 0x043B, 0x0000, 0x0000, 0x041C, 0x043C, 0x0000, 0x0000,
        0x041D, 0x043D, 0x0000, 0x0000, 0x041E, 0x043E, 0x0000, 0x0000, 0x041F, 0x043F, 0x0000, 0x0000,
        0x0420, 0x0440, 0x0000, 0x0000, 0x0421, 0x0441, 0x0000, 0x0000, 0x0422, 0x0442, 0x0000, 0x0000,
        0x0423, 0x0443, 0x0000, 0x0000, 0x0424, 0x0444, 0x0000, 0x0000, 0x0425, 0x0445, 0x0000, 0x0000,
        0x0426, 0x0446, 0x0000, 0x0000, 0x0427, 0x0447, 0x0000, 0x0000, 0x0428, 0x0448, 0x0000, 0x0000,
        0x0429, 0x0449, 0x0000, 0x0000, 0x042A, 0x044A, 0x0000, 0x0000, 0x042B, 0x044B, 0x0000, 0x0000,
        0x042C, 0x044C, 0x0000, 0x0000, 0x042D, 0x044D, 0x0000, 0x0000, 0x042E, 0x044E, 0x0000, 0x0000,
        0x042F, 0x044F, 0x0000, 0x0000, 0x0460, 0x0461, 0x0000, 0x0000, 0x0462, 0x0463, 0x0000, 0x0000,
        0x0464, 0x0465, 0x0000, 0x0000, 0x0466, 0x0467, 0x0000, 0x0000, 0x0468, 0x0469, 0x0000, 0x0000,
        0x046A, 0x046B, 0x0000, 0x0000, 0x046C, 0x046D, 0x0000, 0x0000, 0x046E, 0x046F, 0x0000, 0x0000,
        0x0470, 0x0471, 0x0000, 0x0000, 0x0472, 0x0473, 0x0000, 0x0000, 0x0474, 0x0475, 0x0000, 0x0000,
        0x0476, 0x0477, 0x0000, 0x0000, 0x0478, 0x0479, 0x0000, 0x0000, 0x047A, 0x047B, 0x0000, 0x0000,
        0x047C, 0x047D, 0x0000, 0x0000, 0x047E, 0x047F, 0x0000, 0x0000, 0x0480, 0x0481, 0x0000, 0x0000,
        0x0490, 0x0491, 0x0000, 0x0000, 0x0492, 0x0493, 0x0000, 0x0000, 0x0494, 0x0495, 0x0000, 0x0000,
        0x0496, 0x0497, 0x0000, 0x0000, 0x0498, 0x0499, 0x0000, 0x0000, 0x049A, 0x049B, 0x0000, 0x0000,
        0x049C, 0x049D, 0x0000, 0x0000, 0x049E, 0x049F, 0x0000, 0x0000, 0x04A0, 0x04A1, 0x0000, 0x0000,
        0x04A2, 0x04A3, 0x0000, 0x0000, 0x04A4, 0x04A5, 0x0000, 0x0000, 0x04A6, 0x04A7, 0x0000, 0x0000,
        0x04A8, 0x04A9, 0x0000, 0x0000, 0x04AA, 0x04AB, 0x0000, 0x0000, 0x04AC, 0x04AD, 0x0000, 0x0000,
        0x04AE, 0x04AF, 0x0000, 0x0000, 0x04B0, 0x04B1, 0x0000, 0x0000, 0x04B2, 0x04B3, 0x0000, 0x0000,
        0x04B4, 0x04B5, 0x0000, 0x0000, 0x04B6, 0x04B7, 0x0000, 0x0000, 0x04B8, 0x04B9, 0x0000, 0x0000,
        0x04BA, 0x04BB, 0x0000, 0x0000, 0x04BC, 0x04BD, 0x0000, 0x0000, 0x04BE, 0x04BF, 0x0000, 0x0000,
        0x04C1, 0x04C2, 0x0000, 0x0000, 0x04C3, 0x04C4, 0x0000, 0x0000, 0x04C7, 0x04C8, 0x0000, 0x0000,
        0x04CB, 0x04CC, 0x0000, 0x0000, 0x04D0, 0x04D1, 0x0000, 0x0000, 0x04D2, 0x04D3, 0x0000, 0x0000,
        0x04D4, 0x04D5, 0x0000, 0x0000, 0x04D6, 0x04D7, 0x0000, 0x0000, 0x04D8, 0x04D9, 0x0000, 0x0000,
        0x04DA, 0x04DB, 0x0000, 0x0000, 0x04DC, 0x04DD, 0x0000, 0x0000, 0x04DE, 0x04DF, 0x0000, 0x0000,
        0x04E0, 0x04E1, 0x0000, 0x0000, 0x04E2, 0x04E3, 0x0000, 0x0000, 0x04E4, 0x04E5, 0x0000, 0x0000,
        0x04E6, 0x04E7, 0x0000, 0x0000, 0x04E8, 0x04E9, 0x0000, 0x0000, 0x04EA, 0x04EB, 0x0000, 0x0000,
        0x04EE, 0x04EF, 0x0000, 0x0000, 0x04F0, 0x04F1, 0x0000, 0x0000, 0x04F2, 0x04F3, 0x0000, 0x0000,
        0x04F4, 0x04F5, 0x0000, 0x0000, 0x04F8, 0x04F9, 0x0000, 0x0000, 0x0531, 0x0561, 0x0000, 0x0000,
        0x0532, 0x0562, 0x0000, 0x0000, 0x0533, 0x0563, 0x0000, 0x0000, 0x0534, 0x0564, 0x0000, 0x0000,
        0x0535, 0x0565, 0x0000, 0x0000, 0x0536, 0x0566, 0x0000, 0x0000, 0x0537, 0x0567, 0x0000, 0x0000,
        0x0538, 0x0568, 0x0000, 0x0000, 0x0539, 0x0569, 0x0000, 0x0000, 0x053A, 0x056A, 0x0000, 0x0000,
        0x053B, 0x056B, 0x0000, 0x0000, 0x053C, 0x056C, 0x0000, 0x0000, 0x053D, 0x056D, 0x0000, 0x0000,
        0x053E, 0x056E, 0x0000, 0x0000, 0x053F, 0x056F, 0x0000, 0x0000, 0x0540, 0x0570, 0x0000, 0x0000,
        0x0541, 0x0571, 0x0000, 0x0000, 0x0542, 0x0572, 0x0000, 0x0000, 0x0543, 0x0573, 0x0000, 0x0000,
        0x0544, 0x0574, 0x0000, 0x0000, 0x0545, 0x0575, 0x0000, 0x0000, 0x0546, 0x0576, 0x0000, 0x0000,
        0x0547, 0x0577, 0x0000, 0x0000, 0x0548, 0x0578, 0x0000, 0x0000, 0x0549, 0x0579, 0x0000, 0x0000,
        0x054A, 0x057A, 0x0000, 0x0000, 0x054B, 0x057B, 0x0000, 0x0000, 0x054C, 0x057C, 0x0000, 0x0000,
        0x054D, 0x057D, 0x0000, 0x0000, 0x054E, 0x057E, 0x0000, 0x0000, 0x054F, 0x057F, 0x0000, 0x0000,
        0x0550, 0x0580, 0x0000, 0x0000, 0x0551, 0x0581, 0x0000, 0x0000, 0x0552, 0x0582, 0x0000, 0x0000,
        0x0553, 0x0583, 0x0000, 0x0000, 0x0554, 0x0584, 0x0000, 0x0000, 0x0555, 0x0585, 0x0000, 0x0000,
        0x0556, 0x0586, 0x0000, 0x0000, 0x1E00, 0x1E01, 0x0000, 0x0000, 0x1E02, 0x1E03, 0x0000, 0x0000,
        0x1E04, 0x1E05, 0x0000, 0x0000, 0x1E06, 0x1E07, 0x0000, 0x0000, 0x1E08, 0x1E09, 0x0000, 0x0000,
        0x1E0A, 0x1E0B, 0x0000, 0x0000, 0x1E0C, 0x1E0D, 0x0000, 0x0000, 0x1E0E, 0x1E0F, 0x0000, 0x0000,
        0x1E10, 0x1E11, 0x0000, 0x0000, 0x1E12, 0x1E13, 0x0000, 0x0000, 0x1E14, 0x1E15, 0x0000, 0x0000,
        0x1E16, 0x1E17, 0x0000, 0x0000, 0x1E18, 0x1E19, 0x0000, 0x0000, 0x1E1A, 0x1E1B, 0x0000, 0x0000,
        0x1E1C, 0x1E1D, 0x0000, 0x0000, 0x1E1E, 0x1E1F, 0x0000, 0x0000, 0x1E20, 0x1E21, 0x0000, 0x0000,
        0x1E22, 0x1E23, 0x0000, 0x0000, 0x1E24, 0x1E25, 0x0000, 0x0000, 0x1E26, 0x1E27, 0x0000, 0x0000,
        0x1E28, 0x1E29, 0x0000, 0x0000, 0x1E2A, 0x1E2B, 0x0000, 0x0000, 0x1E2C, 0x1E2D, 0x0000, 0x0000,
        0x1E2E, 0x1E2F, 0x0000, 0x0000, 0x1E30, 0x1E31, 0x0000, 0x0000, 0x1E32, 0x1E33, 0x0000, 0x0000,
        0x1E34, 0x1E35, 0x0000, 0x0000, 0x1E36, 0x1E37, 0x0000, 0x0000, 0x1E38, 0x1E39, 0x0000, 0x0000,
        0x1E3A, 0x1E3B, 0x0000, 0x0000, 0x1E3C, 0x1E3D, 0x0000, 0x0000, 0x1E3E, 0x1E3F, 0x0000, 0x0000,
        0x1E40, 0x1E41, 0x0000, 0x0000, 0x1E42, 0x1E43, 0x0000, 0x0000, 0x1E44, 0x1E45, 0x0000, 0x0000,
        0x1E46, 0x1E47, 0x0000, 0x0000, 0x1E48, 0x1E49, 0x0000, 0x0000, 0x1E4A, 0x1E4B, 0x0000, 0x0000,
        0x1E4C, 0x1E4D, 0x0000, 0x0000, 0x1E4E, 0x1E4F, 0x0000, 0x0000, 0x1E50, 0x1E51, 0x0000, 0x0000,
        0x1E52, 0x1E53, 0x0000, 0x0000, 0x1E54, 0x1E55, 0x0000, 0x0000, 0x1E56, 0x1E57, 0x0000, 0x0000,
        0x1E58, 0x1E59, 0x0000, 0x0000, 0x1E5A, 0x1E5B, 0x0000, 0x0000, 0x1E5C, 0x1E5D, 0x0000, 0x0000,
        0x1E5E, 0x1E5F, 0x0000, 0x0000, 0x1E60, 0x1E61, 0x1E9B, 0x0000, 0x1E62, 0x1E63, 0x0000, 0x0000,
        0x1E64, 0x1E65, 0x0000, 0x0000, 0x1E66, 0x1E67, 0x0000, 0x0000, 0x1E68, 0x1E69, 0x0000, 0x0000,
        0x1E6A, 0x1E6B, 0x0000, 0x0000, 0x1E6C, 0x1E6D, 0x0000, 0x0000, 0x1E6E, 0x1E6F, 0x0000, 0x0000,
        0x1E70, 0x1E71, 0x0000, 0x0000, 0x1E72, 0x1E73, 0x0000, 0x0000, 0x1E74, 0x1E75, 0x0000, 0x0000,
        0x1E76, 0x1E77, 0x0000, 0x0000, 0x1E78, 0x1E79, 0x0000, 0x0000, 0x1E7A, 0x1E7B, 0x0000, 0x0000,
        0x1E7C, 0x1E7D, 0x0000, 0x0000, 0x1E7E, 0x1E7F, 0x0000, 0x0000, 0x1E80, 0x1E81, 0x0000, 0x0000,
        0x1E82, 0x1E83, 0x0000, 0x0000, 0x1E84, 0x1E85, 0x0000, 0x0000, 0x1E86, 0x1E87, 0x0000, 0x0000,
        0x1E88, 0x1E89, 0x0000, 0x0000, 0x1E8A, 0x1E8B, 0x0000, 0x0000, 0x1E8C, 0x1E8D, 0x0000, 0x0000,
        0x1E8E, 0x1E8F, 0x0000, 0x0000, 0x1E90, 0x1E91, 0x0000, 0x0000, 0x1E92, 0x1E93, 0x0000, 0x0000,
        0x1E94, 0x1E95, 0x0000, 0x0000, 0x1EA0, 0x1EA1, 0x0000, 0x0000, 0x1EA2, 0x1EA3, 0x0000, 0x0000,
        0x1EA4, 0x1EA5, 0x0000, 0x0000, 0x1EA6, 0x1EA7, 0x0000, 0x0000, 0x1EA8, 0x1EA9, 0x0000, 0x0000,
        0x1EAA, 0x1EAB, 0x0000, 0x0000, 0x1EAC, 0x1EAD, 0x0000, 0x0000, 0x1EAE, 0x1EAF, 0x0000, 0x0000,
        0x1EB0, 0x1EB1, 0x0000, 0x0000, 0x1EB2, 0x1EB3, 0x0000, 0x0000, 0x1EB4, 0x1EB5, 0x0000, 0x0000,
        0x1EB6, 0x1EB7, 0x0000, 0x0000, 0x1EB8, 0x1EB9, 0x0000, 0x0000, 0x1EBA, 0x1EBB, 0x0000, 0x0000,
        0x1EBC, 0x1EBD, 0x0000, 0x0000, 0x1EBE, 0x1EBF, 0x0000, 0x0000, 0x1EC0, 0x1EC1, 0x0000, 0x0000,
        0x1EC2, 0x1EC3, 0x0000, 0x0000, 0x1EC4, 0x1EC5, 0x0000, 0x0000, 0x1EC6, 0x1EC7, 0x0000, 0x0000,
        0x1EC8, 0x1EC9, 0x0000, 0x0000, 0x1ECA, 0x1ECB, 0x0000, 0x0000, 0x1ECC, 0x1ECD, 0x0000, 0x0000,
        0x1ECE, 0x1ECF, 0x0000, 0x0000, 0x1ED0, 0x1ED1, 0x0000, 0x0000, 0x1ED2, 0x1ED3, 0x0000, 0x0000,
        0x1ED4, 0x1ED5, 0x0000, 0x0000, 0x1ED6, 0x1ED7, 0x0000, 0x0000, 0x1ED8, 0x1ED9, 0x0000, 0x0000,
        0x1EDA, 0x1EDB, 0x0000, 0x0000, 0x1EDC, 0x1EDD, 0x0000, 0x0000, 0x1EDE, 0x1EDF, 0x0000, 0x0000,
        0x1EE0, 0x1EE1, 0x0000, 0x0000, 0x1EE2, 0x1EE3, 0x0000, 0x0000, 0x1EE4, 0x1EE5, 0x0000, 0x0000,
        0x1EE6, 0x1EE7, 0x0000, 0x0000, 0x1EE8, 0x1EE9, 0x0000, 0x0000, 0x1EEA, 0x1EEB, 0x0000, 0x0000,
        0x1EEC, 0x1EED, 0x0000, 0x0000, 0x1EEE, 0x1EEF, 0x0000, 0x0000, 0x1EF0, 0x1EF1, 0x0000, 0x0000,
        0x1EF2, 0x1EF3, 0x0000, 0x0000, 0x1EF4, 0x1EF5, 0x0000, 0x0000, 0x1EF6, 0x1EF7, 0x0000, 0x0000,
        0x1EF8, 0x1EF9, 0x0000, 0x0000, 0x1F00, 0x1F08, 0x0000, 0x0000, 0x1F01, 0x1F09, 0x0000, 0x0000,
        0x1F02, 0x1F0A, 0x0000, 0x0000, 0x1F03, 0x1F0B, 0x0000, 0x0000, 0x1F04, 0x1F0C, 0x0000, 0x0000,
        0x1F05, 0x1F0D, 0x0000, 0x0000, 0x1F06, 0x1F0E, 0x0000, 0x0000, 0x1F07, 0x1F0F, 0x0000, 0x0000,
        0x1F10, 0x1F18, 0x0000, 0x0000, 0x1F11, 0x1F19, 0x0000, 0x0000, 0x1F12, 0x1F1A, 0x0000, 0x0000,
        0x1F13, 0x1F1B, 0x0000, 0x0000, 0x1F14, 0x1F1C, 0x0000, 0x0000, 0x1F15, 0x1F1D, 0x0000, 0x0000,
        0x1F20, 0x1F28, 0x0000, 0x0000, 0x1F21, 0x1F29, 0x0000, 0x0000, 0x1F22, 0x1F2A, 0x0000, 0x0000,
        0x1F23, 0x1F2B, 0x0000, 0x0000, 0x1F24, 0x1F2C, 0x0000, 0x0000, 0x1F25, 0x1F2D, 0x0000, 0x0000,
        0x1F26, 0x1F2E, 0x0000, 0x0000, 0x1F27, 0x1F2F, 0x0000, 0x0000, 0x1F30, 0x1F38, 0x0000, 0x0000,
        0x1F31, 0x1F39, 0x0000, 0x0000, 0x1F32, 0x1F3A, 0x0000, 0x0000, 0x1F33, 0x1F3B, 0x0000, 0x0000,
        0x1F34, 0x1F3C, 0x0000, 0x0000, 0x1F35, 0x1F3D, 0x0000, 0x0000, 0x1F36, 0x1F3E, 0x0000, 0x0000,
        0x1F37, 0x1F3F, 0x0000, 0x0000, 0x1F40, 0x1F48, 0x0000, 0x0000, 0x1F41, 0x1F49, 0x0000, 0x0000,
        0x1F42, 0x1F4A, 0x0000, 0x0000, 0x1F43, 0x1F4B, 0x0000, 0x0000, 0x1F44, 0x1F4C, 0x0000, 0x0000,
        0x1F45, 0x1F4D, 0x0000, 0x0000, 0x1F51, 0x1F59, 0x0000, 0x0000, 0x1F53, 0x1F5B, 0x0000, 0x0000,
        0x1F55, 0x1F5D, 0x0000, 0x0000, 0x1F57, 0x1F5F, 0x0000, 0x0000, 0x1F60, 0x1F68, 0x0000, 0x0000,
        0x1F61, 0x1F69, 0x0000, 0x0000, 0x1F62, 0x1F6A, 0x0000, 0x0000, 0x1F63, 0x1F6B, 0x0000, 0x0000,
        0x1F64, 0x1F6C, 0x0000, 0x0000, 0x1F65, 0x1F6D, 0x0000, 0x0000, 0x1F66, 0x1F6E, 0x0000, 0x0000,
        0x1F67, 0x1F6F, 0x0000, 0x0000, 0x1F70, 0x1FBA, 0x0000, 0x0000, 0x1F71, 0x1FBB, 0x0000, 0x0000,
        0x1F72, 0x1FC8, 0x0000, 0x0000, 0x1F73, 0x1FC9, 0x0000, 0x0000, 0x1F74, 0x1FCA, 0x0000, 0x0000,
        0x1F75, 0x1FCB, 0x0000, 0x0000, 0x1F76, 0x1FDA, 0x0000, 0x0000, 0x1F77, 0x1FDB, 0x0000, 0x0000,
        0x1F78, 0x1FF8, 0x0000, 0x0000, 0x1F79, 0x1FF9, 0x0000, 0x0000, 0x1F7A, 0x1FEA, 0x0000, 0x0000,
        0x1F7B, 0x1FEB, 0x0000, 0x0000, 0x1F7C, 0x1FFA, 0x0000, 0x0000, 0x1F7D, 0x1FFB, 0x0000, 0x0000,
        0x1F80, 0x1F88, 0x0000, 0x0000, 0x1F81, 0x1F89, 0x0000, 0x0000, 0x1F82, 0x1F8A, 0x0000, 0x0000,
        0x1F83, 0x1F8B, 0x0000, 0x0000, 0x1F84, 0x1F8C, 0x0000, 0x0000, 0x1F85, 0x1F8D, 0x0000, 0x0000,
        0x1F86, 0x1F8E, 0x0000, 0x0000, 0x1F87, 0x1F8F, 0x0000, 0x0000, 0x1F90, 0x1F98, 0x0000, 0x0000,
        0x1F91, 0x1F99, 0x0000, 0x0000, 0x1F92, 0x1F9A, 0x0000, 0x0000, 0x1F93, 0x1F9B, 0x0000, 0x0000,
        0x1F94, 0x1F9C, 0x0000, 0x0000, 0x1F95, 0x1F9D, 0x0000, 0x0000, 0x1F96, 0x1F9E, 0x0000, 0x0000,
        0x1F97, 0x1F9F, 0x0000, 0x0000, 0x1FA0, 0x1FA8, 0x0000, 0x0000, 0x1FA1, 0x1FA9, 0x0000, 0x0000,
        0x1FA2, 0x1FAA, 0x0000, 0x0000, 0x1FA3, 0x1FAB, 0x0000, 0x0000, 0x1FA4, 0x1FAC, 0x0000, 0x0000,
        0x1FA5, 0x1FAD, 0x0000, 0x0000, 0x1FA6, 0x1FAE, 0x0000, 0x0000, 0x1FA7, 0x1FAF, 0x0000, 0x0000,
        0x1FB0, 0x1FB8, 0x0000, 0x0000, 0x1FB1, 0x1FB9, 0x0000, 0x0000, 0x1FB3, 0x1FBC, 0x0000, 0x0000,
        0x1FC3, 0x1FCC, 0x0000, 0x0000, 0x1FD0, 0x1FD8, 0x0000, 0x0000, 0x1FD1, 0x1FD9, 0x0000, 0x0000,
        0x1FE0, 0x1FE8, 0x0000, 0x0000, 0x1FE1, 0x1FE9, 0x0000, 0x0000, 0x1FE5, 0x1FEC, 0x0000, 0x0000,
        0x1FF3, 0x1FFC, 0x0000, 0x0000, 0x2160, 0x2170, 0x0000, 0x0000, 0x2161, 0x2171, 0x0000, 0x0000,
        0x2162, 0x2172, 0x0000, 0x0000, 0x2163, 0x2173, 0x0000, 0x0000, 0x2164, 0x2174, 0x0000, 0x0000,
        0x2165, 0x2175, 0x0000, 0x0000, 0x2166, 0x2176, 0x0000, 0x0000, 0x2167, 0x2177, 0x0000, 0x0000,
        0x2168, 0x2178, 0x0000, 0x0000, 0x2169, 0x2179, 0x0000, 0x0000, 0x216A, 0x217A, 0x0000, 0x0000,
        0x216B, 0x217B, 0x0000, 0x0000, 0x216C, 0x217C, 0x0000, 0x0000, 0x216D, 0x217D, 0x0000, 0x0000,
        0x216E, 0x217E, 0x0000, 0x0000, 0x216F, 0x217F, 0x0000, 0x0000, 0x24B6, 0x24D0, 0x0000, 0x0000,
        0x24B7, 0x24D1, 0x0000, 0x0000, 0x24B8, 0x24D2, 0x0000, 0x0000, 0x24B9, 0x24D3, 0x0000, 0x0000,
        0x24BA, 0x24D4, 0x0000, 0x0000, 0x24BB, 0x24D5, 0x0000, 0x0000, 0x24BC, 0x24D6, 0x0000, 0x0000,
        0x24BD, 0x24D7, 0x0000, 0x0000, 0x24BE, 0x24D8, 0x0000, 0x0000, 0x24BF, 0x24D9, 0x0000, 0x0000,
        0x24C0, 0x24DA, 0x0000, 0x0000, 0x24C1, 0x24DB, 0x0000, 0x0000, 0x24C2, 0x24DC, 0x0000, 0x0000,
        0x24C3, 0x24DD, 0x0000, 0x0000, 0x24C4, 0x24DE, 0x0000, 0x0000, 0x24C5, 0x24DF, 0x0000, 0x0000,
        0x24C6, 0x24E0, 0x0000, 0x0000, 0x24C7, 0x24E1, 0x0000, 0x0000, 0x24C8, 0x24E2, 0x0000, 0x0000,
        0x24C9, 0x24E3, 0x0000, 0x0000, 0x24CA, 0x24E4, 0x0000, 0x0000, 0x24CB, 0x24E5, 0x0000, 0x0000,
        0x24CC, 0x24E6, 0x0000, 0x0000, 0x24CD, 0x24E7, 0x0000, 0x0000, 0x24CE, 0x24E8, 0x0000, 0x0000,
        0x24CF, 0x24E9, 0x0000, 0x0000, 0xFF21, 0xFF41, 0x0000, 0x0000, 0xFF22, 0xFF42, 0x0000, 0x0000,
        0xFF23, 0xFF43, 0x0000, 0x0000, 0xFF24, 0xFF44, 0x0000, 0x0000, 0xFF25, 0xFF45, 0x0000, 0x0000,
        0xFF26, 0xFF46, 0x0000, 0x0000, 0xFF27, 0xFF47, 0x0000, 0x0000, 0xFF28, 0xFF48, 0x0000, 0x0000,
        0xFF29, 0xFF49, 0x0000, 0x0000, 0xFF2A, 0xFF4A, 0x0000, 0x0000, 0xFF2B, 0xFF4B, 0x0000, 0x0000,
        0xFF2C, 0xFF4C, 0x0000, 0x0000, 0xFF2D, 0xFF4D, 0x0000, 0x0000, 0xFF2E, 0xFF4E, 0x0000, 0x0000,
        0xFF2F, 0xFF4F, 0x0000, 0x0000, 0xFF30, 0xFF50, 0x0000, 0x0000, 0xFF31, 0xFF51, 0x0000, 0x0000,
        0xFF32, 0xFF52, 0x0000, 0x0000, 0xFF33, 0xFF53, 0x0000, 0x0000, 0xFF34, 0xFF54, 0x0000, 0x0000,
        0xFF35, 0xFF55, 0x0000, 0x0000, 0xFF36, 0xFF56, 0x0000, 0x0000, 0xFF37, 0xFF57, 0x0000, 0x0000,
        0xFF38, 0xFF58, 0x0000, 0x0000, 0xFF39, 0xFF59, 0x0000, 0x0000, 0xFF3A, 0xFF5A, 0x0000, 0x0000,
    ],
    caseless_match_partition_size: 4,
};
