//! Logo art and palettes for every registry entry.
//!
//! Template lines carry `{N}` palette placeholders (zero-width); the
//! trailing spaces on every line are the gutter between the art and
//! the text column, so all lines of one logo share one visible width.

use crate::logo::Logo;

pub(crate) const ALPINE: Logo = Logo {
    lines: &[
        "               ",
        "               ",
        "               ",
        "               ",
        "{0}    /\\ /\\      ",
        "{0}   /  \\  \\     ",
        "{0}  / /\\ \\  \\    ",
        "{0} / /  \\ \\  \\   ",
        "{0}/ /    \\ \\  \\  ",
        "{0}   {1}/\\{0}   \\ \\    ",
        "{0}  {1}/  \\{0}   \\ \\   ",
        "{0} {1}/ /\\ \\{0}   \\ \\  ",
        "               ",
        "               ",
        "               ",
        "               ",
    ],
    palette: &["1;34", "1;37"],
};

pub(crate) const ANDROID: Logo = Logo {
    lines: &[
        "                     ",
        "                     ",
        "                     ",
        "                     ",
        "{0}  ;,           ,;    ",
        "{0}   ';,.-----.,;'     ",
        "{0}  ,'           ',    ",
        "{0} /    {1}O     O{0}    \\   ",
        "{0};                 ;  ",
        "{0}|                 |  ",
        "{0}|                 |  ",
        "{0}'-----------------'  ",
        "                     ",
        "                     ",
        "                     ",
        "                     ",
    ],
    palette: &["1;32", "1;37"],
};

pub(crate) const ARCH: Logo = Logo {
    lines: &[
        "                  ",
        "                  ",
        "                  ",
        "                  ",
        "{0}       /\\         ",
        "{0}      /  \\        ",
        "{0}     /    \\       ",
        "{0}    /      \\      ",
        "{1}   /   __   \\     ",
        "{1}  /   |  |   \\    ",
        "{1} / .  |  |  . \\   ",
        "{1}/_-''      ''-_\\  ",
        "                  ",
        "                  ",
        "                  ",
        "                  ",
    ],
    palette: &["1;36", "0;36"],
};

pub(crate) const CENTOS: Logo = Logo {
    lines: &[
        "                  ",
        "                  ",
        "                  ",
        "                  ",
        "{0}    ____{1}^{0}____     ",
        "{0}    |\\  {1}|{0}  /|     ",
        "{0}    | \\ {1}|{0} / |     ",
        "{2}  <------{3}------>  ",
        "{2}    | / {3}|{2} \\ |     ",
        "{2}    |/__{3}|{2}__\\|     ",
        "{3}        v         ",
        "                  ",
        "                  ",
        "                  ",
        "                  ",
        "                  ",
    ],
    palette: &["1;33", "1;32", "1;34", "1;35"],
};

pub(crate) const CRUNCHBANG: Logo = Logo {
    lines: &[
        "              ",
        "              ",
        "              ",
        "              ",
        "              ",
        "{0}  ||  ||   {1}|  ",
        "{0} ======== {1}||  ",
        "{0}  ||  ||  {1}||  ",
        "{0} ======== {1}||  ",
        "{0}  ||  ||  {1}'   ",
        "{0}  ||  ||  {1}o   ",
        "              ",
        "              ",
        "              ",
        "              ",
        "              ",
    ],
    palette: &["1;37", "0;37"],
};

pub(crate) const DEBIAN: Logo = Logo {
    lines: &[
        "            ",
        "            ",
        "            ",
        "            ",
        "            ",
        "{0}   _____    ",
        "{0}  /  __ \\   ",
        "{0} |  /    |  ",
        "{0} |  {1}\\___-   ",
        "{1}  -_        ",
        "{1}    --_     ",
        "            ",
        "            ",
        "            ",
        "            ",
        "            ",
    ],
    palette: &["1;31", "0;31"],
};

pub(crate) const FEDORA: Logo = Logo {
    lines: &[
        "                ",
        "                ",
        "                ",
        "                ",
        "{0}      _____     ",
        "{0}     /   __){1}\\   ",
        "{0}     |  /  {1}\\ \\  ",
        "{0}  ___{1}|  |__/ /  ",
        "{0} {1}/ (_    _)_/   ",
        "{0} {1}/ /  |  |      ",
        "{0} {1}\\ \\__/  |      ",
        "{0}  {1}\\(_____/      ",
        "                ",
        "                ",
        "                ",
        "                ",
    ],
    palette: &["1;34", "1;37"],
};

pub(crate) const FREEBSD: Logo = Logo {
    lines: &[
        "                ",
        "                ",
        "                ",
        "                ",
        "                ",
        "{0} /\\,-'''''-,/\\  ",
        "{0} \\_)       (_/  ",
        "{0} |           |  ",
        "{0} |           |  ",
        "{1}  ;         ;   ",
        "{1}   '-_____-'    ",
        "                ",
        "                ",
        "                ",
        "                ",
        "                ",
    ],
    palette: &["1;31", "0;31"],
};

pub(crate) const GENTOO: Logo = Logo {
    lines: &[
        "              ",
        "              ",
        "              ",
        "              ",
        "{0}  _-----_     ",
        "{0} (       \\    ",
        "{0} \\    {1}0{0}   \\   ",
        "{0}  \\        )  ",
        "{0}  /      _/   ",
        "{0} (     _-     ",
        "{0} \\____-       ",
        "              ",
        "              ",
        "              ",
        "              ",
        "              ",
    ],
    palette: &["1;35", "1;37"],
};

pub(crate) const KALI: Logo = Logo {
    lines: &[
        "                      ",
        "                      ",
        "                      ",
        "{0}      ..........      ",
        "{0}   ..............     ",
        "{0}  ...        .....    ",
        "{0} ..      {1}...   ....   ",
        "{0}.      {1}..   ..   ...  ",
        "{1}        ..    ..  ..  ",
        "{1}         ..    .  ..  ",
        "{1}          ..      .   ",
        "{1}            ..        ",
        "{1}             .        ",
        "                      ",
        "                      ",
        "                      ",
    ],
    palette: &["1;34", "0;34"],
};

pub(crate) const LINUX: Logo = Logo {
    lines: &[
        "              ",
        "              ",
        "              ",
        "              ",
        "{1}     ▄██▄     ",
        "{1}    ██▘▝██    ",
        "{1}    ██▖▗██    ",
        "{1}   ▟██████▙   ",
        "{1}  ▟██{0}▛▜{1}███▙   ",
        "{1} ▟███{0}▙▟{1}████▙  ",
        "{0}▐█{1}███████{0}██▌  ",
        "{0} ▀▀{1}▜████▛{0}▀▀   ",
        "              ",
        "              ",
        "              ",
        "              ",
    ],
    palette: &["1;33", "1;37"],
};

pub(crate) const LINUX_ASCII: Logo = Logo {
    lines: &[
        "             ",
        "             ",
        "             ",
        "             ",
        "{1}    .--.     ",
        "{1}   |{0}o{1}_{0}o{1} |    ",
        "{1}   |:_/ |    ",
        "{1}  //   \\ \\   ",
        "{1} (|     | )  ",
        "{1}/'\\_   _/`\\  ",
        "{1}\\___)=(___/  ",
        "             ",
        "             ",
        "             ",
        "             ",
        "             ",
    ],
    palette: &["1;33", "1;37"],
};

pub(crate) const LINUX_MINT: Logo = Logo {
    lines: &[
        "                 ",
        "                 ",
        "                 ",
        "                 ",
        "{0} ___________     ",
        "{0}|_          \\    ",
        "{0}  | {1}| _____ {0}|    ",
        "{0}  | {1}| | | | {0}|    ",
        "{0}  | {1}| | | | {0}|    ",
        "{0}  | {1}\\_____/ {0}|    ",
        "{0}  \\___________/  ",
        "                 ",
        "                 ",
        "                 ",
        "                 ",
        "                 ",
    ],
    palette: &["1;32", "1;37"],
};

pub(crate) const MACOS: Logo = Logo {
    lines: &[
        "                 ",
        "                 ",
        "                 ",
        "{0}        ▗▟▛      ",
        "{0}       ▗██▘      ",
        "{0}   ▗▄███████▄▖   ",
        "{1}  ▟██████████▛   ",
        "{1} ▐█████████▛     ",
        "{2} ▐█████████▙     ",
        "{2} ▐███████████▖   ",
        "{3}  ▜████████████  ",
        "{3}   ▜██████████▘  ",
        "{4}    ▜███▛▜███▛   ",
        "                 ",
        "                 ",
        "                 ",
    ],
    palette: &["1;32", "1;33", "0;31", "0;35", "1;34"],
};

pub(crate) const MACOS_ASCII: Logo = Logo {
    lines: &[
        "                ",
        "                ",
        "                ",
        "                ",
        "{0}       .:'      ",
        "{0}    __ :'__     ",
        "{1} .'`__`-'__``.  ",
        "{2}:__________.-'  ",
        "{2}:_________:     ",
        "{3} :_________`-;  ",
        "{4}  `.__.-.__.'   ",
        "                ",
        "                ",
        "                ",
        "                ",
        "                ",
    ],
    palette: &["1;32", "1;33", "0;31", "0;35", "1;34"],
};

pub(crate) const MANJARO: Logo = Logo {
    lines: &[
        "                 ",
        "                 ",
        "                 ",
        "                 ",
        "{0}|||||||||| ||||  ",
        "{0}|||||||||| ||||  ",
        "{0}||||       ||||  ",
        "{0}|||| {1}||||{0} ||||   ",
        "{0}|||| {1}||||{0} ||||   ",
        "{0}|||| {1}||||{0} ||||   ",
        "{0}|||| {1}||||{0} ||||   ",
        "{0}|||| {1}||||{0} ||||   ",
        "                 ",
        "                 ",
        "                 ",
        "                 ",
    ],
    palette: &["1;32", "0;32"],
};

pub(crate) const NIXOS: Logo = Logo {
    lines: &[
        "               ",
        "               ",
        "               ",
        "               ",
        "{0}  \\\\  \\\\ //    ",
        "{0} ==\\\\__\\\\/ //  ",
        "{0}   //   \\\\//   ",
        "{1}==//     //==  ",
        "{1} //\\\\___//     ",
        "{1}// /\\\\  \\\\==   ",
        "{1}  // \\\\  \\\\    ",
        "               ",
        "               ",
        "               ",
        "               ",
        "               ",
    ],
    palette: &["1;34", "0;36"],
};

pub(crate) const OPENSUSE: Logo = Logo {
    lines: &[
        "              ",
        "              ",
        "              ",
        "              ",
        "{0}  _______     ",
        "{0}__|   __ \\    ",
        "{0}     / {1}.{0} \\ \\  ",
        "{0}     \\__/ |   ",
        "{0}   _______|   ",
        "{0}   \\_______   ",
        "{0}__________/   ",
        "              ",
        "              ",
        "              ",
        "              ",
        "              ",
    ],
    palette: &["1;32", "1;37"],
};

pub(crate) const POPOS: Logo = Logo {
    lines: &[
        "                   ",
        "                   ",
        "                   ",
        "                   ",
        "{0}______             ",
        "{0}\\   _ \\        {1}__  ",
        "{0} \\ \\ \\ \\      {1}/ /  ",
        "{0}  \\ \\_\\ \\    {1}/ /   ",
        "{0}   \\  ___\\  {1}/_/    ",
        "{0}    \\ \\    {1}_       ",
        "{0}   __\\_\\__{1}(_)_     ",
        "{0}  (___________)    ",
        "                   ",
        "                   ",
        "                   ",
        "                   ",
    ],
    palette: &["1;36", "1;37"],
};

pub(crate) const RASPBIAN: Logo = Logo {
    lines: &[
        "                   ",
        "                   ",
        "                   ",
        "{0}  .~~.   .~~.      ",
        "{0} '. \\ ' ' / .'     ",
        "{1}  .~ .~~~..~.      ",
        "{1} : .~.'~'.~. :     ",
        "{1}~ (   ) (   ) ~    ",
        "{1}( : '~'.~.'~' : )  ",
        "{1} ~ .~ (   ) ~. ~   ",
        "{1}  (  : '~' :  )    ",
        "{1}   '~ .~~~. ~'     ",
        "{1}       '~'         ",
        "                   ",
        "                   ",
        "                   ",
    ],
    palette: &["1;32", "1;31"],
};

pub(crate) const SLACKWARE: Logo = Logo {
    lines: &[
        "                 ",
        "                 ",
        "                 ",
        "                 ",
        "{0}   ________      ",
        "{0}  /  ______|     ",
        "{0}  | |______      ",
        "{0}  \\______  \\     ",
        "{0}   ______| |     ",
        "{0}  | |________/   ",
        "{0}  |____________  ",
        "                 ",
        "                 ",
        "                 ",
        "                 ",
        "                 ",
    ],
    palette: &["1;34", "1;37"],
};

pub(crate) const UBUNTU: Logo = Logo {
    lines: &[
        "              ",
        "              ",
        "              ",
        "              ",
        "              ",
        "{0}          _   ",
        "{0}      ---{1}(_)  ",
        "{0}  _/{2}  ---  {0}\\  ",
        "{0} {2}(_){0} |   |    ",
        "{0}   \\{2}  --- {0}_/  ",
        "{0}      ---{2}(_)  ",
        "              ",
        "              ",
        "              ",
        "              ",
        "              ",
    ],
    palette: &["1;31", "1;33", "0;31"],
};

pub(crate) const VOID: Logo = Logo {
    lines: &[
        "               ",
        "               ",
        "               ",
        "               ",
        "{0}    _______    ",
        "{0} _ {1}\\______ -   ",
        "{0}| {1}\\  ___  \\ |  ",
        "{0}| {1}| /   \\ | |  ",
        "{0}| {1}| \\___/ | |  ",
        "{0}| {1}\\______ \\_|  ",
        "{0} {1}-_______\\     ",
        "               ",
        "               ",
        "               ",
        "               ",
        "               ",
    ],
    palette: &["1;32", "0;32"],
};

pub(crate) const WINDOWS: Logo = Logo {
    lines: &[
        "                      ",
        "                      ",
        "                      ",
        "{0}#########  {1}#########  ",
        "{0}#########  {1}#########  ",
        "{0}#########  {1}#########  ",
        "{0}#########  {1}#########  ",
        "                      ",
        "{0}#########  {1}#########  ",
        "{0}#########  {1}#########  ",
        "{0}#########  {1}#########  ",
        "{0}#########  {1}#########  ",
        "                      ",
        "                      ",
        "                      ",
        "                      ",
    ],
    palette: &["1;34", "1;36"],
};
