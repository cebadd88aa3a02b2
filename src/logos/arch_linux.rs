use super::Logo;
use crate::colors::Colors;

pub const ARCH_LINUX: Logo = Logo {
    colors: [Colors::BlueBright, Colors::BlueNormal],
    lines: &[
        "{c0}               +                ",
        "{c0}               #                ",
        "{c0}              ###               ",
        "{c0}             #####              ",
        "{c0}             ######             ",
        "{c0}            ; #####;            ",
        "{c0}           +##.#####            ",
        "{c0}          +##########           ",
        "{c0}         ######{c1}#####{c0}##;         ",
        "{c0}        ###{c1}############{c0}+        ",
        "{c0}       #{c1}######   #######{c0}        ",
        "{c0}     {c1}.######;     ;###;`\".{c0}      ",
        "{c0}    {c1}.#######;     ;#####.{c0}       ",
        "{c0}    {c1}#########.   .########`{c0}     ",
        "{c0}   {c1}######'           '######{c0}    ",
        "{c0}  {c1};####                 ####;{c0}   ",
        "{c0}  {c1}##'                     '##{c0}   ",
        "{c0} {c1}#'                         `#{c0}  ",
    ],
};
