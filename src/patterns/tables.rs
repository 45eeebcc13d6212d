// The authored correction tables. Order is significant: long-s first (restores
// recognizable words), then li/h, then ll/U, then rn/m, ligatures, joined
// words, watermark residue, and anachronism stripping last.
//
// Admission rule: a substitution is only listed here if the error form is not
// a legitimate historical word. Ambiguous forms (publick, shew, lie, HaUe)
// live in the CONTEXT table below and are counted, never replaced.

use super::{Category, PatternSpec};

macro_rules! sub {
    ($cat:ident, $name:literal, $re:literal, $rep:literal) => {
        PatternSpec {
            category: Category::$cat,
            name: $name,
            pattern: $re,
            replacement: $rep,
            note: None,
        }
    };
    ($cat:ident, $name:literal, $re:literal, $rep:literal, $note:literal) => {
        PatternSpec {
            category: Category::$cat,
            name: $name,
            pattern: $re,
            replacement: $rep,
            note: Some($note),
        }
    };
}

pub(super) const SUBSTITUTIONS: &[PatternSpec] = &[
    // ==========================================================================
    // Long s: the glyph itself, then words where OCR read the long s as f
    // ==========================================================================
    sub!(LongS, "long_s_glyph", r"ſ", "s"),
    sub!(LongS, "fuch", r"(?i)\bfuch\b", "such"),
    sub!(LongS, "fome", r"(?i)\bfome\b", "some"),
    sub!(LongS, "faid", r"(?i)\bfaid\b", "said"),
    sub!(LongS, "fays", r"(?i)\bfays\b", "says"),
    sub!(LongS, "feen", r"(?i)\bfeen\b", "seen"),
    sub!(LongS, "feems", r"(?i)\bfeems\b", "seems"),
    sub!(LongS, "feem", r"(?i)\bfeem\b", "seem"),
    sub!(LongS, "felf", r"(?i)\bfelf\b", "self"),
    sub!(LongS, "fhall", r"(?i)\bfhall\b", "shall"),
    sub!(LongS, "fhould", r"(?i)\bfhould\b", "should"),
    sub!(LongS, "fhe", r"(?i)\bfhe\b", "she"),
    sub!(LongS, "fince", r"(?i)\bfince\b", "since"),
    sub!(LongS, "fmall", r"(?i)\bfmall\b", "small"),
    sub!(LongS, "foon", r"(?i)\bfoon\b", "soon"),
    sub!(LongS, "fpeak", r"(?i)\bfpeak\b", "speak"),
    sub!(LongS, "fpoke", r"(?i)\bfpoke\b", "spoke"),
    sub!(LongS, "ftand", r"(?i)\bftand\b", "stand"),
    sub!(LongS, "ftate", r"(?i)\bftate\b", "state"),
    sub!(LongS, "ftates", r"(?i)\bftates\b", "states"),
    sub!(LongS, "ftill", r"(?i)\bftill\b", "still"),
    sub!(LongS, "ftood", r"(?i)\bftood\b", "stood"),
    sub!(LongS, "ftrong", r"(?i)\bftrong\b", "strong"),
    sub!(LongS, "fubject", r"(?i)\bfubject\b", "subject"),
    sub!(LongS, "fuffer", r"(?i)\bfuffer\b", "suffer"),
    sub!(LongS, "fupport", r"(?i)\bfupport\b", "support"),
    sub!(LongS, "fure", r"(?i)\bfure\b", "sure"),
    sub!(LongS, "fyftem", r"(?i)\bfyftem\b", "system"),
    sub!(LongS, "himfelf", r"(?i)\bhimfelf\b", "himself"),
    sub!(LongS, "herfelf", r"(?i)\bherfelf\b", "herself"),
    sub!(LongS, "itfelf", r"(?i)\bitfelf\b", "itself"),
    sub!(LongS, "myfelf", r"(?i)\bmyfelf\b", "myself"),
    sub!(LongS, "yourfelf", r"(?i)\byourfelf\b", "yourself"),
    sub!(LongS, "themfelves", r"(?i)\bthemfelves\b", "themselves"),
    sub!(LongS, "ourfelves", r"(?i)\bourfelves\b", "ourselves"),
    sub!(LongS, "fufficient", r"(?i)\bfufficient\b", "sufficient"),
    sub!(LongS, "fuccefs", r"(?i)\bfuccefs\b", "success"),
    sub!(LongS, "fuccefsful", r"(?i)\bfuccefsful\b", "successful"),
    sub!(LongS, "necefsary", r"(?i)\bnecefsary\b", "necessary"),
    sub!(LongS, "poffible", r"(?i)\bpoffible\b", "possible"),
    sub!(LongS, "impoffible", r"(?i)\bimpoffible\b", "impossible"),
    sub!(LongS, "poffefs", r"(?i)\bpoffefs\b", "possess"),
    sub!(LongS, "poffeffion", r"(?i)\bpoffeffion\b", "possession"),
    sub!(LongS, "paffage", r"(?i)\bpaffage\b", "passage"),
    sub!(LongS, "paffed", r"(?i)\bpaffed\b", "passed"),
    sub!(LongS, "pafs", r"(?i)\bpafs\b", "pass"),
    sub!(LongS, "clafs", r"(?i)\bclafs\b", "class"),
    sub!(LongS, "clafses", r"(?i)\bclafses\b", "classes"),
    sub!(LongS, "mafs", r"(?i)\bmafs\b", "mass"),
    sub!(LongS, "lefs", r"(?i)\blefs\b", "less"),
    sub!(LongS, "unlefs", r"(?i)\bunlefs\b", "unless"),
    sub!(LongS, "bufinefs", r"(?i)\bbufinefs\b", "business"),
    sub!(LongS, "congrefs", r"(?i)\bcongrefs\b", "congress"),
    sub!(LongS, "progrefs", r"(?i)\bprogrefs\b", "progress"),
    sub!(LongS, "exprefs", r"(?i)\bexprefs\b", "express"),
    sub!(LongS, "alfo", r"(?i)\balfo\b", "also"),
    sub!(LongS, "moft", r"(?i)\bmoft\b", "most"),
    sub!(LongS, "muft", r"(?i)\bmuft\b", "must"),
    sub!(LongS, "almoft", r"(?i)\balmoft\b", "almost"),
    sub!(LongS, "firft", r"(?i)\bfirft\b", "first"),
    sub!(LongS, "juft", r"(?i)\bjuft\b", "just"),
    sub!(LongS, "laft", r"(?i)\blaft\b", "last"),
    sub!(LongS, "thofe", r"(?i)\bthofe\b", "those"),
    sub!(LongS, "thefe", r"(?i)\bthefe\b", "these"),
    sub!(LongS, "prefent", r"(?i)\bprefent\b", "present"),
    sub!(LongS, "reafon", r"(?i)\breafon\b", "reason"),
    sub!(LongS, "perfon", r"(?i)\bperfon\b", "person"),
    sub!(LongS, "obferve", r"(?i)\bobferve\b", "observe"),
    sub!(LongS, "pleafure", r"(?i)\bpleafure\b", "pleasure"),
    sub!(LongS, "purpofe", r"(?i)\bpurpofe\b", "purpose"),
    sub!(LongS, "houfe", r"(?i)\bhoufe\b", "house"),
    sub!(LongS, "ufe", r"(?i)\bufe\b", "use"),
    sub!(LongS, "caufe", r"(?i)\bcaufe\b", "cause"),
    sub!(LongS, "becaufe", r"(?i)\bbecaufe\b", "because"),
    sub!(LongS, "courfe", r"(?i)\bcourfe\b", "course"),
    // ==========================================================================
    // li / h confusion: h misread as li (and b/h swaps seen in the same scans)
    // ==========================================================================
    sub!(LiHConfusion, "tbe", r"(?i)\btbe\b", "the"),
    sub!(LiHConfusion, "tlie", r"(?i)\btlie\b", "the"),
    sub!(LiHConfusion, "tiie", r"(?i)\btiie\b", "the"),
    sub!(LiHConfusion, "llie", r"(?i)\bllie\b", "the"),
    sub!(LiHConfusion, "tbis", r"(?i)\btbis\b", "this"),
    sub!(LiHConfusion, "tliis", r"(?i)\btliis\b", "this"),
    sub!(LiHConfusion, "tbat", r"(?i)\btbat\b", "that"),
    sub!(LiHConfusion, "tliat", r"(?i)\btliat\b", "that"),
    sub!(LiHConfusion, "wbich", r"(?i)\bwbich\b", "which"),
    sub!(LiHConfusion, "whicb", r"(?i)\bwhicb\b", "which"),
    sub!(LiHConfusion, "wliich", r"(?i)\bwliich\b", "which"),
    sub!(LiHConfusion, "wliicli", r"(?i)\bwliicli\b", "which"),
    sub!(LiHConfusion, "wliat", r"(?i)\bwliat\b", "what"),
    sub!(LiHConfusion, "wlien", r"(?i)\bwlien\b", "when"),
    sub!(LiHConfusion, "wben", r"(?i)\bwben\b", "when"),
    sub!(LiHConfusion, "wliere", r"(?i)\bwliere\b", "where"),
    sub!(LiHConfusion, "wliile", r"(?i)\bwliile\b", "while"),
    sub!(LiHConfusion, "wlio", r"(?i)\bwlio\b", "who"),
    sub!(LiHConfusion, "wliose", r"(?i)\bwliose\b", "whose"),
    sub!(LiHConfusion, "wliom", r"(?i)\bwliom\b", "whom"),
    sub!(LiHConfusion, "wliole", r"(?i)\bwliole\b", "whole"),
    sub!(LiHConfusion, "wliether", r"(?i)\bwliether\b", "whether"),
    sub!(LiHConfusion, "liim", r"(?i)\bliim\b", "him"),
    sub!(LiHConfusion, "liis", r"(?i)\bliis\b", "his"),
    sub!(LiHConfusion, "hia", r"(?i)\bhia\b", "his"),
    sub!(LiHConfusion, "lier", r"(?i)\blier\b", "her"),
    sub!(LiHConfusion, "slie", r"(?i)\bslie\b", "she"),
    sub!(LiHConfusion, "tliey", r"(?i)\btliey\b", "they"),
    sub!(LiHConfusion, "tbey", r"(?i)\btbey\b", "they"),
    sub!(LiHConfusion, "tbeir", r"(?i)\btbeir\b", "their"),
    sub!(LiHConfusion, "tlieir", r"(?i)\btlieir\b", "their"),
    sub!(LiHConfusion, "tbem", r"(?i)\btbem\b", "them"),
    sub!(LiHConfusion, "tliem", r"(?i)\btliem\b", "them"),
    sub!(LiHConfusion, "tben", r"(?i)\btben\b", "then"),
    sub!(LiHConfusion, "tlien", r"(?i)\btlien\b", "then"),
    sub!(LiHConfusion, "tbere", r"(?i)\btbere\b", "there"),
    sub!(LiHConfusion, "tliere", r"(?i)\btliere\b", "there"),
    sub!(LiHConfusion, "tbese", r"(?i)\btbese\b", "these"),
    sub!(LiHConfusion, "tliese", r"(?i)\btliese\b", "these"),
    sub!(LiHConfusion, "tbose", r"(?i)\btbose\b", "those"),
    sub!(LiHConfusion, "tliose", r"(?i)\btliose\b", "those"),
    sub!(LiHConfusion, "otber", r"(?i)\botber\b", "other"),
    sub!(LiHConfusion, "otlier", r"(?i)\botlier\b", "other"),
    sub!(LiHConfusion, "witb", r"(?i)\bwitb\b", "with"),
    sub!(LiHConfusion, "witli", r"(?i)\bwitli\b", "with"),
    sub!(LiHConfusion, "liave", r"(?i)\bliave\b", "have"),
    sub!(LiHConfusion, "bave", r"(?i)\bbave\b", "have"),
    sub!(LiHConfusion, "tliough", r"(?i)\btliough\b", "though"),
    sub!(LiHConfusion, "tlirough", r"(?i)\btlirough\b", "through"),
    sub!(LiHConfusion, "tliink", r"(?i)\btliink\b", "think"),
    sub!(LiHConfusion, "tliing", r"(?i)\btliing\b", "thing"),
    sub!(LiHConfusion, "tliings", r"(?i)\btliings\b", "things"),
    sub!(LiHConfusion, "cliild", r"(?i)\bcliild\b", "child"),
    sub!(LiHConfusion, "cliildren", r"(?i)\bcliildren\b", "children"),
    sub!(LiHConfusion, "cliief", r"(?i)\bcliief\b", "chief"),
    sub!(LiHConfusion, "cliurch", r"(?i)\bcliurch\b", "church"),
    sub!(LiHConfusion, "notliing", r"(?i)\bnotliing\b", "nothing"),
    sub!(LiHConfusion, "sometliing", r"(?i)\bsometliing\b", "something"),
    sub!(LiHConfusion, "anytliing", r"(?i)\banytliing\b", "anything"),
    sub!(LiHConfusion, "liead", r"(?i)\bliead\b", "head"),
    sub!(LiHConfusion, "lieart", r"(?i)\blieart\b", "heart"),
    sub!(LiHConfusion, "liand", r"(?i)\bliand\b", "hand"),
    sub!(LiHConfusion, "liouse", r"(?i)\bliouse\b", "house"),
    sub!(LiHConfusion, "liow", r"(?i)\bliow\b", "how"),
    sub!(LiHConfusion, "liere", r"(?i)\bliere\b", "here"),
    sub!(LiHConfusion, "liigh", r"(?i)\bliigh\b", "high"),
    sub!(LiHConfusion, "sucli", r"(?i)\bsucli\b", "such"),
    sub!(LiHConfusion, "sliould", r"(?i)\bsliould\b", "should"),
    // ==========================================================================
    // ll (and li) misread as a single capital U. Case-sensitive on purpose:
    // the capital U inside a lowercase word is the OCR signature.
    // ==========================================================================
    sub!(LlUConfusion, "wiU", r"\bwiU\b", "will"),
    sub!(LlUConfusion, "WiU", r"\bWiU\b", "Will"),
    sub!(LlUConfusion, "weU", r"\bweU\b", "well"),
    sub!(LlUConfusion, "fuU", r"\bfuU\b", "full"),
    sub!(LlUConfusion, "smaU", r"\bsmaU\b", "small"),
    sub!(LlUConfusion, "stiU", r"\bstiU\b", "still"),
    sub!(LlUConfusion, "StiU", r"\bStiU\b", "Still"),
    sub!(LlUConfusion, "shaU", r"\bshaU\b", "shall"),
    sub!(LlUConfusion, "ShaU", r"\bShaU\b", "Shall"),
    sub!(LlUConfusion, "feU", r"\bfeU\b", "fell"),
    sub!(LlUConfusion, "teU", r"\bteU\b", "tell"),
    sub!(LlUConfusion, "tiU", r"\btiU\b", "till"),
    sub!(LlUConfusion, "aU", r"\baU\b", "all"),
    sub!(LlUConfusion, "waU", r"\bwaU\b", "wall"),
    sub!(LlUConfusion, "faU", r"\bfaU\b", "fall"),
    sub!(LlUConfusion, "caU", r"\bcaU\b", "call"),
    sub!(LlUConfusion, "caUed", r"\bcaUed\b", "called"),
    sub!(LlUConfusion, "caUing", r"\bcaUing\b", "calling"),
    sub!(LlUConfusion, "foUow", r"\bfoUow\b", "follow"),
    sub!(LlUConfusion, "foUows", r"\bfoUows\b", "follows"),
    sub!(LlUConfusion, "foUowed", r"\bfoUowed\b", "followed"),
    sub!(LlUConfusion, "foUowing", r"\bfoUowing\b", "following"),
    sub!(LlUConfusion, "doUar", r"\bdoUar\b", "dollar"),
    sub!(LlUConfusion, "doUars", r"\bdoUars\b", "dollars"),
    sub!(LlUConfusion, "coUege", r"\bcoUege\b", "college"),
    sub!(LlUConfusion, "coUection", r"\bcoUection\b", "collection"),
    sub!(LlUConfusion, "coUected", r"\bcoUected\b", "collected"),
    sub!(LlUConfusion, "coUect", r"\bcoUect\b", "collect"),
    sub!(LlUConfusion, "exceUent", r"\bexceUent\b", "excellent"),
    sub!(LlUConfusion, "inteUigent", r"\binteUigent\b", "intelligent"),
    sub!(LlUConfusion, "inteUigence", r"\binteUigence\b", "intelligence"),
    sub!(LlUConfusion, "pubUc", r"\bpubUc\b", "public"),
    sub!(LlUConfusion, "engUsh", r"\bengUsh\b", "English"),
    sub!(LlUConfusion, "EngUsh", r"\bEngUsh\b", "English"),
    sub!(LlUConfusion, "heaUh", r"\bheaUh\b", "health"),
    sub!(LlUConfusion, "litUe", r"\blitUe\b", "little"),
    sub!(LlUConfusion, "fuUy", r"\bfuUy\b", "fully"),
    sub!(LlUConfusion, "feUow", r"\bfeUow\b", "fellow"),
    sub!(LlUConfusion, "parUament", r"\bparUament\b", "parliament"),
    sub!(LlUConfusion, "miUtary", r"\bmiUtary\b", "military"),
    sub!(LlUConfusion, "mUe", r"\bmUe\b", "mile"),
    sub!(LlUConfusion, "mUes", r"\bmUes\b", "miles"),
    sub!(LlUConfusion, "poUcy", r"\bpoUcy\b", "policy"),
    sub!(LlUConfusion, "appUed", r"\bappUed\b", "applied"),
    sub!(LlUConfusion, "appUy", r"\bappUy\b", "apply"),
    sub!(LlUConfusion, "appUcation", r"\bappUcation\b", "application"),
    sub!(LlUConfusion, "appUcations", r"\bappUcations\b", "applications"),
    sub!(LlUConfusion, "estabUshed", r"\bestabUshed\b", "established"),
    sub!(LlUConfusion, "genUeman", r"\bgenUeman\b", "gentleman"),
    sub!(LlUConfusion, "generaUy", r"\bgeneraUy\b", "generally"),
    sub!(LlUConfusion, "aUow", r"\baUow\b", "allow"),
    sub!(LlUConfusion, "aUowed", r"\baUowed\b", "allowed"),
    sub!(LlUConfusion, "viUage", r"\bviUage\b", "village"),
    sub!(LlUConfusion, "viUages", r"\bviUages\b", "villages"),
    sub!(LlUConfusion, "whoUy", r"\bwhoUy\b", "wholly"),
    sub!(LlUConfusion, "buUt", r"\bbuUt\b", "built"),
    sub!(LlUConfusion, "buUding", r"\bbuUding\b", "building"),
    sub!(LlUConfusion, "buUdings", r"\bbuUdings\b", "buildings"),
    sub!(LlUConfusion, "yeUow", r"\byeUow\b", "yellow"),
    sub!(LlUConfusion, "coUonel", r"\bcoUonel\b", "colonel"),
    sub!(LlUConfusion, "beUeve", r"\bbeUeve\b", "believe"),
    sub!(LlUConfusion, "beUeved", r"\bbeUeved\b", "believed"),
    sub!(LlUConfusion, "beUef", r"\bbeUef\b", "belief"),
    sub!(LlUConfusion, "miUion", r"\bmiUion\b", "million"),
    sub!(LlUConfusion, "miUions", r"\bmiUions\b", "millions"),
    sub!(LlUConfusion, "daUy", r"\bdaUy\b", "daily"),
    sub!(LlUConfusion, "deUvered", r"\bdeUvered\b", "delivered"),
    sub!(LlUConfusion, "vaUey", r"\bvaUey\b", "valley"),
    sub!(LlUConfusion, "vaUeys", r"\bvaUeys\b", "valleys"),
    sub!(LlUConfusion, "kiUed", r"\bkiUed\b", "killed"),
    sub!(LlUConfusion, "especiaUy", r"\bespeciaUy\b", "especially"),
    sub!(LlUConfusion, "chUdren", r"\bchUdren\b", "children"),
    sub!(LlUConfusion, "feeUng", r"\bfeeUng\b", "feeling"),
    sub!(LlUConfusion, "feeUngs", r"\bfeeUngs\b", "feelings"),
    sub!(LlUConfusion, "famUy", r"\bfamUy\b", "family"),
    sub!(LlUConfusion, "famUies", r"\bfamUies\b", "families"),
    sub!(LlUConfusion, "hoUow", r"\bhoUow\b", "hollow"),
    sub!(LlUConfusion, "faUen", r"\bfaUen\b", "fallen"),
    sub!(LlUConfusion, "faUing", r"\bfaUing\b", "falling"),
    sub!(LlUConfusion, "poUtics", r"\bpoUtics\b", "politics"),
    sub!(LlUConfusion, "poUtical", r"\bpoUtical\b", "political"),
    sub!(LlUConfusion, "rebeUion", r"\brebeUion\b", "rebellion"),
    sub!(LlUConfusion, "aUies", r"\baUies\b", "allies"),
    sub!(LlUConfusion, "aUied", r"\baUied\b", "allied"),
    sub!(LlUConfusion, "equaUy", r"\bequaUy\b", "equally"),
    sub!(LlUConfusion, "usuaUy", r"\busuaUy\b", "usually"),
    sub!(LlUConfusion, "quaUty", r"\bquaUty\b", "quality"),
    sub!(LlUConfusion, "raUroad", r"\braUroad\b", "railroad"),
    sub!(LlUConfusion, "originaUy", r"\boriginaUy\b", "originally"),
    sub!(LlUConfusion, "repubUc", r"\brepubUc\b", "republic"),
    sub!(LlUConfusion, "cathoUc", r"\bcathoUc\b", "catholic"),
    sub!(LlUConfusion, "probaUy", r"\bprobaUy\b", "probably"),
    sub!(LlUConfusion, "iUustrated", r"\biUustrated\b", "illustrated"),
    sub!(LlUConfusion, "iUustration", r"\biUustration\b", "illustration"),
    sub!(LlUConfusion, "WiUiam", r"\bWiUiam\b", "William"),
    sub!(LlUConfusion, "WilUam", r"\bWilUam\b", "William"),
    sub!(LlUConfusion, "WiUiams", r"\bWiUiams\b", "Williams"),
    sub!(LlUConfusion, "PhiUip", r"\bPhiUip\b", "Philip"),
    sub!(LlUConfusion, "PhiUppine", r"\bPhiUppine\b", "Philippine"),
    sub!(LlUConfusion, "PhiUppines", r"\bPhiUppines\b", "Philippines"),
    sub!(LlUConfusion, "DubUn", r"\bDubUn\b", "Dublin"),
    sub!(LlUConfusion, "BerUn", r"\bBerUn\b", "Berlin"),
    sub!(LlUConfusion, "lUinois", r"\blUinois\b", "Illinois"),
    sub!(LlUConfusion, "CaroUna", r"\bCaroUna\b", "Carolina"),
    sub!(LlUConfusion, "HoUand", r"\bHoUand\b", "Holland"),
    sub!(LlUConfusion, "ItaUan", r"\bItaUan\b", "Italian"),
    // ==========================================================================
    // rn misread as m (and the reverse)
    // ==========================================================================
    sub!(RnMConfusion, "rnay", r"(?i)\brnay\b", "may"),
    sub!(RnMConfusion, "rnuch", r"(?i)\brnuch\b", "much"),
    sub!(RnMConfusion, "rnore", r"(?i)\brnore\b", "more"),
    sub!(RnMConfusion, "rnust", r"(?i)\brnust\b", "must"),
    sub!(RnMConfusion, "rnost", r"(?i)\brnost\b", "most"),
    sub!(RnMConfusion, "sarne", r"(?i)\bsarne\b", "same"),
    sub!(RnMConfusion, "tirne", r"(?i)\btirne\b", "time"),
    sub!(RnMConfusion, "narne", r"(?i)\bnarne\b", "name"),
    sub!(RnMConfusion, "frorn", r"(?i)\bfrorn\b", "from"),
    sub!(RnMConfusion, "hirn", r"(?i)\bhirn\b", "him"),
    sub!(RnMConfusion, "forrn", r"(?i)\bforrn\b", "form"),
    sub!(RnMConfusion, "warrn", r"(?i)\bwarrn\b", "warm"),
    sub!(RnMConfusion, "arrny", r"(?i)\barrny\b", "army"),
    // ==========================================================================
    // Ligature glyphs, and ff/ffi ligatures the OCR shattered into lSc / fT
    // ==========================================================================
    sub!(Ligature, "lig_fi", r"ﬁ", "fi"),
    sub!(Ligature, "lig_fl", r"ﬂ", "fl"),
    sub!(Ligature, "lig_ff", r"ﬀ", "ff"),
    sub!(Ligature, "lig_ffi", r"ﬃ", "ffi"),
    sub!(Ligature, "lig_ffl", r"ﬄ", "ffl"),
    sub!(Ligature, "oflSce", r"(?i)\boflSce\b", "office"),
    sub!(Ligature, "oflScer", r"(?i)\boflScer\b", "officer"),
    sub!(Ligature, "oflScers", r"(?i)\boflScers\b", "officers"),
    sub!(Ligature, "oflScial", r"(?i)\boflScial\b", "official"),
    sub!(Ligature, "difTerent", r"(?i)\bdifTerent\b", "different"),
    sub!(Ligature, "afTair", r"(?i)\bafTair\b", "affair"),
    sub!(Ligature, "afTairs", r"(?i)\bafTairs\b", "affairs"),
    sub!(Ligature, "afTect", r"(?i)\bafTect\b", "affect"),
    sub!(Ligature, "efTect", r"(?i)\befTect\b", "effect"),
    sub!(Ligature, "efTects", r"(?i)\befTects\b", "effects"),
    // ==========================================================================
    // Words the OCR ran together
    // ==========================================================================
    sub!(WordJoin, "ofthe", r"(?i)\bofthe\b", "of the"),
    sub!(WordJoin, "inthe", r"(?i)\binthe\b", "in the"),
    sub!(WordJoin, "tothe", r"(?i)\btothe\b", "to the"),
    sub!(WordJoin, "andthe", r"(?i)\bandthe\b", "and the"),
    sub!(WordJoin, "onthe", r"(?i)\bonthe\b", "on the"),
    sub!(WordJoin, "itwas", r"(?i)\bitwas\b", "it was"),
    // ==========================================================================
    // Google scan watermark residue, including OCR-damaged renderings of the
    // "Digitized by Google" footer
    // ==========================================================================
    sub!(Watermark, "vjooqic", r"(?i)\bVjOOQIC\b", ""),
    sub!(Watermark, "vjooqlc", r"(?i)\bVjOOQLC\b", ""),
    sub!(Watermark, "ljooqic", r"(?i)\bLjOOQIC\b", ""),
    sub!(Watermark, "cjooqic", r"(?i)\bCjOOQIC\b", ""),
    sub!(Watermark, "cjooqlc", r"(?i)\bCjOOQlC\b", ""),
    sub!(Watermark, "byvjooqlc", r"(?i)\bbyVjOOQlC\b", ""),
    sub!(Watermark, "hygoogic", r"(?i)\bhyGoogIc\b", ""),
    sub!(Watermark, "bygoogle", r"(?i)\bbyGoogle\b", ""),
    sub!(Watermark, "googlc", r"(?i)\bGoOglc\b", ""),
    sub!(Watermark, "ooglc", r"(?i)\bOOglC\b", ""),
    sub!(
        Watermark,
        "digitized_by_damaged",
        r"(?i)Digitized\s+by\s+[VLC]j?OOQ(?:IC|LC|lC)",
        "",
        "footer with the logo OCR'd as VjOOQIC and friends"
    ),
    sub!(Watermark, "digitized_by_google", r"(?i)Digitized\s+by\s+Google", ""),
    // ==========================================================================
    // Bare anachronisms: terms that cannot occur in pre-1914 text
    // ==========================================================================
    sub!(Anachronism, "google", r"(?i)\bgoogle\b", ""),
    sub!(Anachronism, "internet", r"(?i)\binternet\b", ""),
    sub!(Anachronism, "website", r"(?i)\bwebsite\b", ""),
    sub!(Anachronism, "hathitrust", r"(?i)\bhathitrust\b", ""),
    sub!(Anachronism, "online", r"(?i)\bonline\b", ""),
    // ==========================================================================
    // Remaining single-character confusions (u/n, i/l, M/ld) and scan noise
    // ==========================================================================
    sub!(Other, "tke", r"(?i)\btke\b", "the"),
    sub!(Other, "snch", r"(?i)\bsnch\b", "such"),
    sub!(Other, "mnch", r"(?i)\bmnch\b", "much"),
    sub!(Other, "mnst", r"(?i)\bmnst\b", "must"),
    sub!(Other, "thns", r"(?i)\bthns\b", "thus"),
    sub!(Other, "npon", r"(?i)\bnpon\b", "upon"),
    sub!(Other, "wonld", r"(?i)\bwonld\b", "would"),
    sub!(Other, "conld", r"(?i)\bconld\b", "could"),
    sub!(Other, "hnndred", r"(?i)\bhnndred\b", "hundred"),
    sub!(Other, "conntry", r"(?i)\bconntry\b", "country"),
    sub!(Other, "kiiow", r"(?i)\bkiiow\b", "know"),
    sub!(Other, "kiiown", r"(?i)\bkiiown\b", "known"),
    sub!(Other, "tiiis", r"(?i)\btiiis\b", "this"),
    sub!(Other, "wiiich", r"(?i)\bwiiich\b", "which"),
    sub!(Other, "wouid", r"(?i)\bwouid\b", "would"),
    sub!(Other, "couid", r"(?i)\bcouid\b", "could"),
    sub!(Other, "shouid", r"(?i)\bshouid\b", "should"),
    sub!(Other, "wouM", r"(?i)\bwouM\b", "would"),
    sub!(Other, "couM", r"(?i)\bcouM\b", "could"),
    sub!(Other, "shouM", r"(?i)\bshouM\b", "should"),
    sub!(
        Other,
        "repeated_capitals",
        r"(?i)\b(?:aaa+|bbb+|ddd+|eee+|fff+|ggg+|hhh+|jjj+|kkk+|nnn+|ooo+|ppp+|qqq+|rrr+|sss+|ttt+|uuu+|www+|yyy+|zzz+)\b",
        "",
        "letter stutter; i/x/c/m/l/v excluded as Roman numeral components"
    ),
    sub!(Other, "ia_noise", r"\b[I1]A\b", ""),
    sub!(Other, "ih_noise", r"\b[I1]H\b", ""),
];

// Ambiguous forms: counted for audit, never substituted. Resolution depends on
// surrounding context a local regex cannot see.
pub(super) const CONTEXT: &[(&str, &str, &str)] = &[
    ("lie_for_he", r"(?i)\blie\b", "he after a conjunction, or the genuine verb"),
    ("publick", r"(?i)\bpublick\b", "valid 17th-18th century spelling of public"),
    ("untill", r"(?i)\buntill\b", "valid pre-1700 spelling of until"),
    ("chuse", r"(?i)\bchuse\b", "valid 18th century spelling of choose"),
    ("shew", r"(?i)\bshew\b", "valid pre-1800 spelling of show"),
    ("connexion", r"(?i)\bconnexion\b", "British historical spelling of connection"),
    ("horne", r"(?i)\bhorne\b", "home misread, or the surname Horne"),
    ("HaUe_ambiguous", r"\bHaUe\b", "Halle the place, have, or hall"),
];
