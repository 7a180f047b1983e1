//! Journal directory: macro tokens, display names, and initials
//!
//! The macro table must match the `@string` definitions in the target
//! bibliography file. A journal is carried through the pipeline as a
//! [`Journal`] value so that macro tokens and literal names stay distinct
//! all the way to serialization.

use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::warn;

/// A journal reference: either a macro token resolved against the
/// bibliography's `@string` table at build time, or a literal name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Journal {
    /// Short unquoted macro token, e.g. `prl`
    Macro(String),
    /// Literal journal name, e.g. `Phys. Rev. Lett.`
    Name(String),
}

impl Journal {
    /// The display name of the journal. Macro tokens are resolved back
    /// through the directory; an unknown macro falls back to the token.
    pub fn display_name(&self) -> &str {
        match self {
            Journal::Macro(m) => MACRO_TO_NAME.get(m.as_str()).copied().unwrap_or(m),
            Journal::Name(n) => n,
        }
    }
}

lazy_static! {
    /// Dictionary mapping journal macros to full (abbreviated) names.
    static ref MACRO_TO_NAME: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("aamop", "Adv. At. Mol. Opt. Phys.");
        m.insert("aarc", "Autom. Rem. Contr.");
        m.insert("ac", "Anal. Chem.");
        m.insert("acie", "Angew. Chem. Int. Ed.");
        m.insert("aipa", "AIP Advances");
        m.insert("ajp", "Am. J. Phys.");
        m.insert("algo", "Algorithmica");
        m.insert("ao", "Appl. Opt.");
        m.insert("ap", "Adv. Phys.");
        m.insert("apb", "Appl. Phys. B");
        m.insert("apl", "Appl. Phys. Lett.");
        m.insert("apx", "Adv. Phys. X");
        m.insert("aqt", "Adv. Quantum Tech.");
        m.insert("arcmp", "Annu. Rev. Condens. Matter Phys.");
        m.insert("arpc", "Annu. Rev. Phys. Chem.");
        m.insert("astrocomp", "Astron. Comput.");
        m.insert("atms", "ACM Trans. Math. Softw.");
        m.insert("avsqs", "AVS Quantum Sci.");
        m.insert("bit", "BIT");
        m.insert("bstj", "Bell System Tech. J.");
        m.insert("cacm", "Commun. ACM");
        m.insert("ccyb", "Control Cybern.");
        m.insert("cmp", "Commun. Math. Phys.");
        m.insert("computj", "Comput. J.");
        m.insert("contp", "Contemp. Phys.");
        m.insert("cp", "Chem. Phys.");
        m.insert("cpam", "Commun. Pur. Appl. Math.");
        m.insert("cpc", "Comput. Phys. Commun.");
        m.insert("cpl", "Chem. Phys. Lett.");
        m.insert("cse", "Comput. Sci. Eng.");
        m.insert("csj", "CEAS Space J.");
        m.insert("ecyb", "Engrg. Cybernetics");
        m.insert("ejc", "Eur. J. Control");
        m.insert("ejp", "Eur. J. Phys.");
        m.insert("electr", "Electronics");
        m.insert("entr", "Entropy");
        m.insert("epjb", "Eur. Phys. J. B");
        m.insert("epjd", "Eur. Phys. J. D");
        m.insert("epjp", "Eur. Phys. J. Plus");
        m.insert("epjqt", "EPJ Quantum Technol.");
        m.insert("epl", "Europhys. Lett.");
        m.insert("farad", "Faraday Disc.");
        m.insert("foundphys", "Found. Phys.");
        m.insert("fp", "Fortschr. Phys.");
        m.insert("icta", "IET Control Theory Appl.");
        m.insert("ijqe", "IEEE J. Quantum Electron.");
        m.insert("ijqi", "Int. J. Quantum Inform.");
        m.insert("ijtp", "Int. J. Theor. Phys.");
        m.insert("imajam", "IMA J. Appl. Math.");
        m.insert("ip", "Inverse Problems");
        m.insert("irpc", "Int. Rev. Phys. Chem.");
        m.insert("itac", "IEEE Trans. Automat. Contr.");
        m.insert("itas", "IEEE Trans. on Appl. Superc.");
        m.insert("jap", "J. Appl. Phys.");
        m.insert("jcam", "J. Comput. Appl. Math");
        m.insert("jcmpp", "J. Comput. Phys.");
        m.insert("jcp", "J. Chem. Phys.");
        m.insert("jcpm", "J. Phys. Condens. Matter");
        m.insert("jcss", "J. Comput. System Sci.");
        m.insert("jctn", "J. Comput. Theor. Nanos.");
        m.insert("jlum", "J. Lumin.");
        m.insert("jmo", "J. Mod. Opt.");
        m.insert("jmp", "J. Math. Phys.");
        m.insert("jmr", "J. Magnet. Res.");
        m.insert("jmra", "J. Magnet. Res. A");
        m.insert("job", "J. Optics B");
        m.insert("jors", "J. Open Res. Softw.");
        m.insert("josab", "J. Opt. Soc. Am. B");
        m.insert("joss", "J. Open Source Softw.");
        m.insert("jota", "J. Optim. Theor. Appl.");
        m.insert("jpa", "J. Phys. A");
        m.insert("jpamt", "J. Phys. A: Math. Theor.");
        m.insert("jpb", "J. Phys. B");
        m.insert("jpc", "J. Phys. Chem.");
        m.insert("jpca", "J. Phys. Chem. A");
        m.insert("jpcm", "J. Phys.: Condens. Matter");
        m.insert("jsp", "J .Stat. Phys.");
        m.insert("mc", "Math. Comput.");
        m.insert("mlst", "Mach. Learn.: Sci. Technol.");
        m.insert("nams", "Notices Amer. Math. Soc.");
        m.insert("nat", "Nature");
        m.insert("natcom", "Nat. Commun.");
        m.insert("natmeth", "Nat. Methods");
        m.insert("natnano", "Nat. Nano.");
        m.insert("natphot", "Nat. Photon.");
        m.insert("natphys", "Nat. Phys.");
        m.insert("njp", "New J. Phys.");
        m.insert("npjqi", "npj Quantum Inf");
        m.insert("nrp", "Nat. Rev. Phys.");
        m.insert("oc", "Opt. Comm.");
        m.insert("oe", "Opt. Express");
        m.insert("os", "Opt. Spectr.");
        m.insert("physd", "Physica D");
        m.insert("physrep", "Phys. Rep.");
        m.insert("pire", "Proc. IRE");
        m.insert("pl", "Phys. Lett.");
        m.insert("pla", "Phys. Lett. A");
        m.insert("plms", "Proc. Lond. Math. Soc.");
        m.insert("pnas", "Proc. Natl. Acad. Sci. U.S.A");
        m.insert("pr", "Phys. Rev.");
        m.insert("pra", "Phys. Rev. A");
        m.insert("prapl", "Phys. Rev. Applied");
        m.insert("prb", "Phys. Rev. B");
        m.insert("prc", "Phys. Rev. C");
        m.insert("prd", "Phys. Rev. D");
        m.insert("pre", "Phys. Rev. E");
        m.insert("prl", "Phys. Rev. Lett.");
        m.insert("prr", "Phys. Rev. Research");
        m.insert("prsa", "Proc. R. Soc. A");
        m.insert("prx", "Phys. Rev. X");
        m.insert("prxq", "PRX Quantum");
        m.insert("ps", "Phys. Scripta");
        m.insert("pt", "Phys. Today");
        m.insert("ptrsa", "Phil. Trans. R. Soc. A");
        m.insert("qam", "Q. Appl. Math.");
        m.insert("qic", "Quantum Info. Comput.");
        m.insert("qip", "Quantum Inf. Process.");
        m.insert("qso", "Quantum Semiclass. Opt.");
        m.insert("qst", "Quantum Sci. Technol.");
        m.insert("quant", "Quantum");
        m.insert("rmp", "Rev. Mod. Phys.");
        m.insert("rms", "Russ. Math. Surv.");
        m.insert("rpp", "Rep. Prog. Phys.");
        m.insert("rsi", "Rev. Sci. Instr.");
        m.insert("sb", "Sci. Bull.");
        m.insert("sci", "Science");
        m.insert("sciam", "Sci. Am.");
        m.insert("scis", "Sci. China Inf. Sci.");
        m.insert("siamjc", "SIAM J. Comput.");
        m.insert("siamjsc", "SIAM J. Sci. Comput.");
        m.insert("siamrev", "SIAM Rev.");
        m.insert("sp", "Sig. Process.");
        m.insert("spp", "SciPost Phys.");
        m.insert("sr", "Sci. Rep.");
        m.insert("sst", "Supercond. Sci. Technol.");
        m.insert("widm", "WIREs Data Mining Knowl Discov.");
        m.insert("zp", "Z. Phys.");
        m
    };

    /// Inverse of [`MACRO_TO_NAME`], plus aliases for name variants
    /// returned by some metadata providers.
    static ref NAME_TO_MACRO: HashMap<&'static str, &'static str> = {
        let mut m: HashMap<&'static str, &'static str> =
            MACRO_TO_NAME.iter().map(|(k, v)| (*v, *k)).collect();
        m.insert("J. Phys. B: At. Mol. Opt. Phys.", "jpb");
        m.insert("The Journal of Chemical Physics", "jcp");
        m
    };

    /// Initials overrides. In most cases the initials are simply every
    /// capital letter of the journal name; these are the exceptions.
    static ref INITIALS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("ACM Trans. Math. Softw.", "ATMS");
        m.insert("CEAS Space J.", "CSJ");
        m.insert("IEEE Trans. on Appl. Superc.", "ITAS");
        m.insert("IEEE Trans. Automat. Contr.", "ITAC");
        m.insert("npj Quantum Inf", "NPJQI");
        m.insert("SIAM J. Comput.", "SJC");
        m.insert("SIAM J. Sci. Comput.", "SJSC");
        m.insert("SIAM Rev.", "SR");
        m
    };
}

/// Look up the macro token for a journal name, if one is defined.
pub fn macro_for(name: &str) -> Option<&'static str> {
    NAME_TO_MACRO.get(name).copied()
}

/// Resolve a display name to a [`Journal`] token.
///
/// Returns a macro token when the name (or a known alias) is in the
/// directory; otherwise the name is kept as a literal. A missing macro is
/// reported as a warning, never as a failure.
pub fn resolve(name: &str) -> Journal {
    match macro_for(name) {
        Some(token) => Journal::Macro(token.to_string()),
        None => {
            warn!("no journal macro for {}", name);
            Journal::Name(name.to_string())
        }
    }
}

/// Journal initials for cite key generation.
///
/// Initials are always derived from the display name, never from the
/// macro token: an explicit override if one exists, else every uppercase
/// ASCII letter of the name in order.
pub fn initials(journal: &Journal) -> String {
    let name = journal.display_name();
    if let Some(initials) = INITIALS.get(name) {
        return (*initials).to_string();
    }
    name.chars().filter(|c| c.is_ascii_uppercase()).collect()
}
