//! Built-in journal abbreviation data
//!
//! Word abbreviations follow the ISO 4 list of title word abbreviations for
//! the words common in scientific journal names.

/// Whole titles whose abbreviation is not the word-by-word result
pub(super) const TITLE_ABBREVIATIONS: &[(&str, &str)] = &[
    (
        "Proceedings of the National Academy of Sciences of the United States of America",
        "Proc. Natl. Acad. Sci. U.S.A.",
    ),
    (
        "Journal of Physics: Condensed Matter",
        "J. Phys.: Condens. Matter",
    ),
    ("Astronomy and Astrophysics", "Astron. Astrophys."),
    ("The Journal of Chemical Physics", "J. Chem. Phys."),
    ("Journal of Cosmology and Astroparticle Physics", "J. Cosmol. Astropart. Phys."),
    ("Physics Reports", "Phys. Rep."),
    (
        "Monthly Notices of the Royal Astronomical Society",
        "Mon. Not. R. Astron. Soc.",
    ),
    ("Nuclear Physics B", "Nucl. Phys. B"),
];

/// Lower-cased title word to its abbreviation
pub(super) const WORD_ABBREVIATIONS: &[(&str, &str)] = &[
    ("academy", "Acad."),
    ("acoustical", "Acoust."),
    ("advances", "Adv."),
    ("american", "Am."),
    ("analysis", "Anal."),
    ("annals", "Ann."),
    ("annual", "Annu."),
    ("applied", "Appl."),
    ("artificial", "Artif."),
    ("association", "Assoc."),
    ("astronomical", "Astron."),
    ("astronomy", "Astron."),
    ("astroparticle", "Astropart."),
    ("astrophysical", "Astrophys."),
    ("astrophysics", "Astrophys."),
    ("biochemistry", "Biochem."),
    ("biological", "Biol."),
    ("biology", "Biol."),
    ("bulletin", "Bull."),
    ("chemical", "Chem."),
    ("chemistry", "Chem."),
    ("communications", "Commun."),
    ("computational", "Comput."),
    ("computer", "Comput."),
    ("computing", "Comput."),
    ("condensed", "Condens."),
    ("conference", "Conf."),
    ("cosmology", "Cosmol."),
    ("economic", "Econ."),
    ("economics", "Econ."),
    ("engineering", "Eng."),
    ("environmental", "Environ."),
    ("european", "Eur."),
    ("experimental", "Exp."),
    ("foundations", "Found."),
    ("geophysical", "Geophys."),
    ("information", "Inf."),
    ("institute", "Inst."),
    ("intelligence", "Intell."),
    ("international", "Int."),
    ("journal", "J."),
    ("learning", "Learn."),
    ("letters", "Lett."),
    ("machine", "Mach."),
    ("materials", "Mater."),
    ("mathematical", "Math."),
    ("mathematics", "Math."),
    ("mechanics", "Mech."),
    ("medical", "Med."),
    ("medicine", "Med."),
    ("modern", "Mod."),
    ("molecular", "Mol."),
    ("monthly", "Mon."),
    ("national", "Natl."),
    ("nature", "Nat."),
    ("networks", "Netw."),
    ("notices", "Not."),
    ("nuclear", "Nucl."),
    ("optical", "Opt."),
    ("optics", "Opt."),
    ("physical", "Phys."),
    ("physics", "Phys."),
    ("planetary", "Planet."),
    ("proceedings", "Proc."),
    ("processing", "Process."),
    ("psychology", "Psychol."),
    ("publications", "Publ."),
    ("reports", "Rep."),
    ("research", "Res."),
    ("review", "Rev."),
    ("reviews", "Rev."),
    ("science", "Sci."),
    ("sciences", "Sci."),
    ("scientific", "Sci."),
    ("series", "Ser."),
    ("society", "Soc."),
    ("statistical", "Stat."),
    ("statistics", "Stat."),
    ("structure", "Struct."),
    ("supplement", "Suppl."),
    ("symposium", "Symp."),
    ("systems", "Syst."),
    ("technology", "Technol."),
    ("theoretical", "Theor."),
    ("transactions", "Trans."),
    ("university", "Univ."),
];

/// Words dropped from abbreviated titles
pub(super) const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "the", "of", "on", "in", "for", "de", "der", "des", "du", "la", "le", "und",
];
