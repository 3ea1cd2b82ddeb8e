//! Offline-verified magic multipliers, one per square in index order.
//!
//! Each constant maps every occupancy subset of its square's relevant mask to
//! a slot in a subtable of exactly `2^popcount(mask)` entries without a
//! destructive collision. Finding them is a separate offline search; the
//! exhaustive `verify` pass re-checks them.

/// Rook magics (CPW "best magics so far" set).
#[rustfmt::skip]
pub const ROOK_MAGICS: [u64; 64] = [
    0x0A80_02C0_0010_8020, 0x06C0_0049_B000_2001, 0x0100_2000_1009_0040, 0x2480_0410_0080_0801,
    0x0280_0280_0400_0800, 0x0900_4100_0804_0022, 0x0280_0200_0100_1080, 0x2880_0020_4100_0080,
    0xA000_8000_8040_0034, 0x0004_8080_2000_4000, 0x2290_8020_0480_1000, 0x0411_000D_0010_0020,
    0x0402_8008_0004_0080, 0x000B_0004_0100_4208, 0x2409_0001_0004_0200, 0x0001_0021_0000_4082,
    0x0022_8780_01E2_4000, 0x1090_8100_2100_4010, 0x0801_0300_4020_0012, 0x0500_8080_0800_1000,
    0x0A08_0180_1400_0880, 0x8000_8080_0400_0200, 0x0201_0080_8001_0200, 0x0801_0200_0044_1091,
    0x0000_8000_8020_4005, 0x1040_2000_4010_0048, 0x0000_1202_0040_2082, 0x0D14_8804_8010_0080,
    0x0012_0402_8008_0080, 0x0100_0400_8002_0080, 0x9020_0100_8080_0200, 0x0813_2412_0014_8449,
    0x0491_6040_0180_0080, 0x0100_4010_0040_2001, 0x4820_0100_2100_1040, 0x0400_4022_0200_0812,
    0x0209_0090_0500_0802, 0x0810_8006_0180_0400, 0x4301_0832_1400_0150, 0x2040_2645_8E00_1401,
    0x0040_2040_0080_8000, 0x8001_0080_4001_0020, 0x8410_8208_2042_0010, 0x1003_0010_0009_0020,
    0x0804_0400_0800_8080, 0x0012_0008_1002_0004, 0x1000_1002_0004_0208, 0x4300_00A0_4402_0001,
    0x0280_0090_2341_0300, 0x00E0_1000_4000_2240, 0x0000_2001_0040_1700, 0x2244_1004_0800_8080,
    0x0008_0004_0080_1980, 0x0002_0008_1004_0200, 0x8010_1002_2881_0400, 0x2000_0090_4421_0200,
    0x4080_0080_4010_2101, 0x0040_0020_8041_1D01, 0x2005_5240_6000_0901, 0x0502_0010_0840_0422,
    0x489A_0008_1020_0402, 0x0001_0044_0008_0A13, 0x4000_0110_0802_0084, 0x0026_0021_1405_8042,
];

/// Bishop magics.
#[rustfmt::skip]
pub const BISHOP_MAGICS: [u64; 64] = [
    0x0002_0202_0202_0200, 0x0002_0202_0202_0000, 0x0004_0102_0200_0000, 0x0004_0400_8000_0000,
    0x0001_1040_0000_0000, 0x0000_8210_4000_0000, 0x0000_4104_1040_0000, 0x0000_1041_0410_4000,
    0x0000_0404_0404_0400, 0x0000_0202_0202_0200, 0x0000_0401_0202_0000, 0x0000_0404_0080_0000,
    0x0000_0110_4000_0000, 0x0000_0082_1040_0000, 0x0000_0041_0410_4000, 0x0000_0020_8208_2000,
    0x0004_0008_0808_0800, 0x0002_0004_0404_0400, 0x0001_0002_0202_0200, 0x0000_8008_0200_4000,
    0x0000_8004_00A0_0000, 0x0000_2001_0088_4000, 0x0000_4000_8208_2000, 0x0000_2000_4104_1000,
    0x0002_0800_1010_1000, 0x0001_0400_0808_0800, 0x0000_2080_0401_0400, 0x0000_4040_0401_0200,
    0x0000_8400_0080_2000, 0x0000_4040_0201_1000, 0x0000_8080_0104_1000, 0x0000_4040_0082_0800,
    0x0001_0410_0020_2000, 0x0000_8208_0010_1000, 0x0000_1044_0008_0800, 0x0000_0200_8008_0080,
    0x0000_4040_4004_0100, 0x0000_8081_0002_0100, 0x0001_0101_0002_0800, 0x0000_8080_8001_0400,
    0x0000_8208_2000_4000, 0x0000_4104_1000_2000, 0x0000_0820_8800_1000, 0x0000_0020_1100_0800,
    0x0000_0801_0040_0400, 0x0001_0101_0100_0200, 0x0002_0202_0200_0400, 0x0001_0101_0100_0200,
    0x0000_4104_1040_0000, 0x0000_2082_0820_0000, 0x0000_0020_8410_0000, 0x0000_0000_2088_0000,
    0x0000_0010_0202_0000, 0x0000_0404_0802_0000, 0x0004_0404_0404_0000, 0x0002_0202_0202_0000,
    0x0000_1041_0410_4000, 0x0000_0020_8208_2000, 0x0000_0000_2084_1000, 0x0000_0000_0020_8800,
    0x0000_0000_1002_0200, 0x0000_0004_0408_0200, 0x0000_0404_0404_0400, 0x0002_0202_0202_0200,
];
