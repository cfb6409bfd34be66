//! Word lists backing the rule-based analyzer. All lookups take lowercase input.

use std::collections::HashSet;
use std::sync::OnceLock;

macro_rules! lexicon {
    ($name:ident, [$($word:literal),* $(,)?]) => {
        pub fn $name(word: &str) -> bool {
            static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
            SET.get_or_init(|| [$($word),*].into_iter().collect())
                .contains(word)
        }
    };
}

lexicon!(is_stop_word, [
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
    "amongst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything",
    "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became", "because",
    "become", "becomes", "becoming", "been", "before", "beforehand", "behind", "being",
    "below", "beside", "besides", "between", "beyond", "both", "bottom", "but", "by",
    "call", "can", "cannot", "could", "did", "do", "does", "doing", "done", "down", "due",
    "during", "each", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough",
    "even", "ever", "every", "everyone", "everything", "everywhere", "except", "few",
    "fifteen", "fifty", "first", "five", "for", "former", "formerly", "forty", "four",
    "from", "front", "full", "further", "get", "give", "go", "had", "has", "have", "he",
    "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers", "herself",
    "him", "himself", "his", "how", "however", "hundred", "i", "if", "in", "indeed", "into",
    "is", "it", "its", "itself", "just", "keep", "last", "latter", "latterly", "least",
    "less", "made", "make", "many", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone",
    "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one",
    "only", "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
    "over", "own", "part", "per", "perhaps", "please", "put", "quite", "rather", "re",
    "really", "regarding", "same", "say", "see", "seem", "seemed", "seeming", "seems",
    "serious", "several", "she", "should", "show", "side", "since", "six", "sixty", "so",
    "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere",
    "still", "such", "take", "ten", "than", "that", "the", "their", "them", "themselves",
    "then", "thence", "there", "thereafter", "thereby", "therefore", "therein",
    "thereupon", "these", "they", "third", "this", "those", "though", "three", "through",
    "throughout", "thru", "thus", "to", "together", "too", "top", "toward", "towards",
    "twelve", "twenty", "two", "under", "unless", "until", "up", "upon", "us", "used",
    "using", "various", "very", "via", "was", "we", "well", "were", "what", "whatever",
    "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein",
    "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever",
    "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet",
    "you", "your", "yours", "yourself", "yourselves", "n't", "'s", "'re", "'ve", "'ll", "'d",
    "'m",
]);

lexicon!(is_determiner, [
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any",
    "no", "another", "either", "neither", "all", "both", "such", "what", "which", "whose",
]);

lexicon!(is_pronoun, [
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself",
    "we", "us", "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves",
    "who", "whom", "someone", "somebody", "something", "anyone", "anybody", "anything",
    "everyone", "everybody", "everything", "nobody", "nothing", "none", "one",
]);

lexicon!(is_adposition, [
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "over", "under", "across", "along", "among", "around", "behind", "beneath", "beside",
    "beyond", "inside", "near", "onto", "outside", "past", "since", "toward", "towards",
    "upon", "within", "without", "throughout", "via", "per", "despite", "like", "until",
]);

lexicon!(is_auxiliary, [
    "is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had",
    "do", "does", "did", "will", "would", "can", "could", "shall", "should", "may",
    "might", "must", "'s", "'re", "'m", "'ve", "'ll", "'d",
]);

lexicon!(is_coordinating_conjunction, ["and", "or", "but", "nor", "yet", "so", "&"]);

lexicon!(is_subordinating_conjunction, [
    "that", "because", "although", "though", "while", "whereas", "if", "unless",
    "whether", "as", "when", "whenever", "where", "wherever", "once", "than",
]);

lexicon!(is_particle, ["not", "n't", "to"]);

lexicon!(is_interjection, ["oh", "yes", "hello", "wow", "alas", "hey", "ok", "okay"]);

lexicon!(is_number_word, [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
    "eighteen", "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy",
    "eighty", "ninety", "hundred", "thousand", "million", "billion", "trillion", "dozen",
]);

lexicon!(is_ordinal_word, [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth", "twentieth", "hundredth", "thousandth",
]);

lexicon!(is_adverb, [
    "very", "also", "often", "always", "never", "only", "just", "too", "quite", "rather",
    "almost", "already", "still", "even", "ever", "here", "there", "now", "then", "however",
    "thus", "therefore", "soon", "well", "again", "perhaps", "sometimes", "usually",
    "mostly", "later", "once", "together", "instead", "moreover", "furthermore", "hence",
    "meanwhile", "otherwise", "indeed", "nearly", "far", "much", "more", "most", "less",
    "least", "yet", "away", "back", "forward", "abroad", "today", "tomorrow", "yesterday",
]);

lexicon!(is_adjective, [
    "good", "bad", "new", "old", "great", "small", "large", "big", "high", "low", "long",
    "short", "young", "important", "different", "major", "main", "common", "early", "late",
    "simple", "green", "red", "blue", "white", "black", "yellow", "human", "natural",
    "several", "many", "few", "other", "same", "own", "able", "free", "full", "whole",
    "real", "true", "strong", "weak", "certain", "clear", "final", "possible", "public",
    "special", "available", "recent", "various", "general", "political", "social",
    "national", "local", "hot", "cold", "warm", "deep", "wide", "rich", "poor", "dark",
    "light", "heavy", "fast", "slow", "easy", "hard", "modern", "ancient", "famous",
    "tall", "huge", "tiny", "single", "entire", "similar", "complex", "basic", "primary",
    "known", "largest", "smallest", "highest", "oldest", "best", "worst", "key",
]);

lexicon!(is_verb_base, [
    "make", "take", "give", "use", "divide", "produce", "form", "become", "include",
    "contain", "provide", "require", "allow", "cause", "create", "show", "find", "keep",
    "help", "play", "move", "live", "grow", "change", "lead", "begin", "seem", "mean",
    "run", "write", "read", "know", "think", "see", "come", "go", "get", "say", "tell",
    "call", "work", "need", "feel", "leave", "put", "bring", "hold", "stand", "turn",
    "start", "absorb", "convert", "occur", "consist", "depend", "describe", "develop",
    "determine", "explain", "build", "discover", "invent", "release", "store", "carry",
    "flow", "reach", "remain", "serve", "cover", "connect", "support", "receive",
    "involve", "represent", "study", "protect", "orbit", "rotate", "emit", "reflect",
    "transport", "regulate", "control", "found", "establish", "win", "lose", "defeat",
    "rule", "visit", "attract", "increase", "decrease", "reduce", "affect", "destroy",
    "break", "die", "born", "kill", "marry", "paint", "design", "publish", "sign",
    "measure", "consume", "digest", "breathe", "evolve", "migrate", "survive",
]);

lexicon!(is_abbreviation, [
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "inc", "ltd", "co",
    "no", "fig", "approx", "dept", "est", "gen", "gov", "mt", "ft", "vol", "e.g", "i.e",
]);

lexicon!(is_honorific, [
    "mr", "mrs", "ms", "miss", "dr", "prof", "professor", "president", "king", "queen",
    "prince", "princess", "sir", "lady", "lord", "saint", "general", "captain", "senator",
    "governor", "emperor", "pope", "chancellor", "minister",
]);

lexicon!(is_month, [
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december",
]);

lexicon!(is_weekday, [
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
]);

lexicon!(is_org_word, [
    "university", "college", "institute", "company", "corporation", "corp", "inc", "ltd",
    "association", "society", "council", "committee", "agency", "bank", "party", "church",
    "foundation", "organization", "organisation", "department", "ministry", "school",
    "academy", "club", "union", "league", "group", "federation", "army", "navy", "nations",
    "court", "congress", "parliament", "senate", "commission", "institution",
]);

lexicon!(is_facility_word, [
    "tower", "bridge", "airport", "station", "stadium", "palace", "castle", "cathedral",
    "temple", "museum", "wall", "building", "hall", "dam", "canal", "highway", "road",
    "street", "square", "pyramid", "pyramids", "gate", "church",
]);

lexicon!(is_location_word, [
    "river", "lake", "mountain", "mountains", "mount", "ocean", "sea", "island", "islands",
    "valley", "desert", "gulf", "bay", "forest", "peninsula", "continent", "canyon",
    "falls", "coast", "strait", "glacier", "plateau", "basin",
]);

lexicon!(is_event_word, [
    "war", "revolution", "olympics", "festival", "summit", "battle", "crisis", "games",
    "championship", "cup", "conference",
]);

lexicon!(is_law_word, ["act", "treaty", "constitution", "amendment", "accord", "convention"]);

lexicon!(is_language_word, [
    "english", "french", "spanish", "german", "latin", "greek", "arabic", "mandarin",
    "hindi", "russian", "portuguese", "italian", "japanese", "korean", "swahili",
]);

lexicon!(is_locative_preposition, [
    "in", "at", "from", "to", "near", "across", "throughout", "into", "around", "outside",
]);

lexicon!(is_entity_connector, ["of", "the", "and", "de", "du", "von", "van", "la", "for"]);

lexicon!(is_quantity_unit, [
    "km", "kilometer", "kilometers", "kilometre", "kilometres", "m", "meter", "meters",
    "metre", "metres", "cm", "centimeters", "mm", "millimeters", "mile", "miles", "foot",
    "feet", "ft", "inch", "inches", "kg", "kilogram", "kilograms", "g", "gram", "grams",
    "pound", "pounds", "lb", "lbs", "ton", "tons", "tonne", "tonnes", "liter", "liters",
    "litre", "litres", "l", "ml", "gallon", "gallons", "degree", "degrees", "acre",
    "acres", "hectare", "hectares", "mph", "kph", "volts", "watts", "calories",
]);

lexicon!(is_time_unit, ["second", "seconds", "minute", "minutes", "hour", "hours", "am", "pm"]);

lexicon!(is_date_unit, [
    "day", "days", "week", "weeks", "month", "months", "year", "years", "decade",
    "decades", "century", "centuries", "bc", "ad", "bce", "ce",
]);

lexicon!(is_percent_word, ["percent", "%"]);

lexicon!(is_noun_despite_suffix, [
    "family", "supply", "assembly", "reply", "italy", "july", "anomaly", "butterfly",
    "ally", "belly", "rally", "bully", "jelly", "lily", "fly", "monopoly", "animal",
    "capital", "hospital", "signal", "metal", "crystal", "journal", "total", "material",
    "festival", "mammal", "canal", "music", "logic", "topic", "traffic", "republic",
    "clinic", "fabric", "mechanic", "objective", "native", "detective", "relative",
    "seed", "need", "speed", "bed", "red", "hundred", "thing", "king", "ring", "spring",
    "string", "wing", "morning", "evening", "building", "ceiling", "painting", "meeting",
    "feeling", "beginning", "offspring", "nothing", "everything", "something",
]);
