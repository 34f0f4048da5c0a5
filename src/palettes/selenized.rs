use crate::palette::Role::{self, *};

pub(crate) const BLACK: [(Role, u32); 14] = [
    (Bg0, 0x181818), (Bg1, 0x252525), (Bg2, 0x3b3b3b),
    (Red, 0xed4a46), (Orange, 0xe67f43), (Yellow, 0xdbb32d),
    (Green, 0x70b433), (Cyan, 0x3fc5b7), (Blue, 0x368aeb),
    (Violet, 0xa580e2), (Magenta, 0xeb6eb7),
    (Dim0, 0x777777), (Fg0, 0xb9b9b9), (Fg1, 0xdedede),
];

pub(crate) const DARK: [(Role, u32); 14] = [
    (Bg0, 0x103c48), (Bg1, 0x184956), (Bg2, 0x2d5b69),
    (Red, 0xfa5750), (Orange, 0xed8649), (Yellow, 0xdbb32d),
    (Green, 0x75b938), (Cyan, 0x41c7b9), (Blue, 0x4695f7),
    (Violet, 0xaf88eb), (Magenta, 0xf275be),
    (Dim0, 0x72898f), (Fg0, 0xadbcbc), (Fg1, 0xcad8d9),
];

pub(crate) const LIGHT: [(Role, u32); 14] = [
    (Bg0, 0xfbf3db), (Bg1, 0xe9e4d0), (Bg2, 0xcfcebe),
    (Red, 0xd2212d), (Orange, 0xc25d1e), (Yellow, 0xad8900),
    (Green, 0x489100), (Cyan, 0x009c8f), (Blue, 0x0072d4),
    (Violet, 0x8762c6), (Magenta, 0xca4898),
    (Dim0, 0x909995), (Fg0, 0x53676d), (Fg1, 0x3a4d53),
];

pub(crate) const WHITE: [(Role, u32); 14] = [
    (Bg0, 0xffffff), (Bg1, 0xebebeb), (Bg2, 0xcdcdcd),
    (Red, 0xd6000c), (Orange, 0xd04a00), (Yellow, 0xc49700),
    (Green, 0x1d9700), (Cyan, 0x00ad9c), (Blue, 0x0064e4),
    (Violet, 0x7f51d6), (Magenta, 0xdd0f9d),
    (Dim0, 0x878787), (Fg0, 0x474747), (Fg1, 0x282828),
];
