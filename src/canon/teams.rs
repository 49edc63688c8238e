//! Static team alias tables, keyed per sport.
//!
//! Each entry maps a canonical team id to the labels feeds actually use:
//! full names, city-only forms, abbreviations, and common misspellings.
//! Abbreviations collide across sports ("SF", "Cardinals", "Giants"), so
//! lookups always go through the table for one sport.
//!
//! Ambiguous labels are resolved by adding explicit entries here, never by
//! fuzzy matching — grouping must stay deterministic and auditable.

/// One canonical team and the normalized labels that resolve to it.
pub struct TeamAlias {
    pub id: &'static str,
    pub aliases: &'static [&'static str],
}

pub const NBA_TEAMS: &[TeamAlias] = &[
    TeamAlias { id: "Hawks", aliases: &["atlanta hawks", "atlanta", "atl"] },
    TeamAlias { id: "Celtics", aliases: &["boston celtics", "boston", "bos"] },
    TeamAlias { id: "Nets", aliases: &["brooklyn nets", "brooklyn", "bkn"] },
    TeamAlias { id: "Hornets", aliases: &["charlotte hornets", "charlotte", "cha"] },
    TeamAlias { id: "Bulls", aliases: &["chicago bulls", "chi"] },
    TeamAlias { id: "Cavaliers", aliases: &["cleveland cavaliers", "cleveland", "cavs", "cle"] },
    TeamAlias { id: "Mavericks", aliases: &["dallas mavericks", "dallas", "mavs", "dal"] },
    TeamAlias { id: "Nuggets", aliases: &["denver nuggets", "denver", "den"] },
    TeamAlias { id: "Pistons", aliases: &["detroit pistons", "detroit", "det"] },
    TeamAlias { id: "Warriors", aliases: &["golden state warriors", "golden state", "gsw", "gs"] },
    TeamAlias { id: "Rockets", aliases: &["houston rockets", "houston", "hou"] },
    TeamAlias { id: "Pacers", aliases: &["indiana pacers", "indiana", "ind"] },
    TeamAlias { id: "Clippers", aliases: &["los angeles clippers", "la clippers", "l.a. clippers", "lac"] },
    TeamAlias { id: "Lakers", aliases: &["los angeles lakers", "la lakers", "l.a. lakers", "lal"] },
    TeamAlias { id: "Grizzlies", aliases: &["memphis grizzlies", "memphis", "mem"] },
    TeamAlias { id: "Heat", aliases: &["miami heat", "miami", "mia"] },
    TeamAlias { id: "Bucks", aliases: &["milwaukee bucks", "milwaukee", "mil"] },
    TeamAlias { id: "Timberwolves", aliases: &["minnesota timberwolves", "minnesota", "wolves", "min"] },
    TeamAlias { id: "Pelicans", aliases: &["new orleans pelicans", "new orleans", "nop", "no"] },
    TeamAlias { id: "Knicks", aliases: &["new york knicks", "ny knicks", "nyk"] },
    TeamAlias { id: "Thunder", aliases: &["oklahoma city thunder", "oklahoma city", "okc"] },
    TeamAlias { id: "Magic", aliases: &["orlando magic", "orlando", "orl"] },
    TeamAlias { id: "76ers", aliases: &["philadelphia 76ers", "philadelphia", "sixers", "phi"] },
    TeamAlias { id: "Suns", aliases: &["phoenix suns", "phoenix", "phx"] },
    TeamAlias { id: "Trail Blazers", aliases: &["portland trail blazers", "portland", "blazers", "por"] },
    TeamAlias { id: "Kings", aliases: &["sacramento kings", "sacramento", "sac"] },
    TeamAlias { id: "Spurs", aliases: &["san antonio spurs", "san antonio", "sas", "sa"] },
    TeamAlias { id: "Raptors", aliases: &["toronto raptors", "toronto", "tor"] },
    TeamAlias { id: "Jazz", aliases: &["utah jazz", "utah", "uta"] },
    TeamAlias { id: "Wizards", aliases: &["washington wizards", "washington", "was"] },
];

pub const NFL_TEAMS: &[TeamAlias] = &[
    TeamAlias { id: "Cardinals", aliases: &["arizona cardinals", "arizona", "ari"] },
    TeamAlias { id: "Falcons", aliases: &["atlanta falcons", "atlanta", "atl"] },
    TeamAlias { id: "Ravens", aliases: &["baltimore ravens", "baltimore", "bal"] },
    TeamAlias { id: "Bills", aliases: &["buffalo bills", "buffalo", "buf"] },
    TeamAlias { id: "Panthers", aliases: &["carolina panthers", "carolina", "car"] },
    TeamAlias { id: "Bears", aliases: &["chicago bears", "chicago", "chi"] },
    TeamAlias { id: "Bengals", aliases: &["cincinnati bengals", "cincinnati", "cin"] },
    TeamAlias { id: "Browns", aliases: &["cleveland browns", "cleveland", "cle"] },
    TeamAlias { id: "Cowboys", aliases: &["dallas cowboys", "dallas", "dal"] },
    TeamAlias { id: "Broncos", aliases: &["denver broncos", "denver", "den"] },
    TeamAlias { id: "Lions", aliases: &["detroit lions", "detroit", "det"] },
    TeamAlias { id: "Packers", aliases: &["green bay packers", "green bay", "gb"] },
    TeamAlias { id: "Texans", aliases: &["houston texans", "houston", "hou"] },
    TeamAlias { id: "Colts", aliases: &["indianapolis colts", "indianapolis", "indy", "ind"] },
    TeamAlias { id: "Jaguars", aliases: &["jacksonville jaguars", "jacksonville", "jags", "jax"] },
    TeamAlias { id: "Chiefs", aliases: &["kansas city chiefs", "kansas city", "kc"] },
    TeamAlias { id: "Raiders", aliases: &["las vegas raiders", "las vegas", "oakland raiders", "lv"] },
    TeamAlias { id: "Chargers", aliases: &["los angeles chargers", "la chargers", "l.a. chargers", "lac"] },
    TeamAlias { id: "Rams", aliases: &["los angeles rams", "la rams", "l.a. rams", "lar"] },
    TeamAlias { id: "Dolphins", aliases: &["miami dolphins", "miami", "mia"] },
    TeamAlias { id: "Vikings", aliases: &["minnesota vikings", "minnesota", "vikes", "min"] },
    TeamAlias { id: "Patriots", aliases: &["new england patriots", "new england", "pats", "ne"] },
    TeamAlias { id: "Saints", aliases: &["new orleans saints", "new orleans", "no"] },
    TeamAlias { id: "Giants", aliases: &["new york giants", "ny giants", "nyg"] },
    TeamAlias { id: "Jets", aliases: &["new york jets", "ny jets", "nyj"] },
    TeamAlias { id: "Eagles", aliases: &["philadelphia eagles", "philadelphia", "philly", "phi"] },
    TeamAlias { id: "Steelers", aliases: &["pittsburgh steelers", "pittsburgh", "pit"] },
    TeamAlias { id: "49ers", aliases: &["san francisco 49ers", "san francisco", "niners", "sf"] },
    TeamAlias { id: "Seahawks", aliases: &["seattle seahawks", "seattle", "sea"] },
    TeamAlias { id: "Buccaneers", aliases: &["tampa bay buccaneers", "tampa bay", "bucs", "tb"] },
    TeamAlias { id: "Titans", aliases: &["tennessee titans", "tennessee", "ten"] },
    TeamAlias { id: "Commanders", aliases: &["washington commanders", "washington", "wsh", "was"] },
];

pub const MLB_TEAMS: &[TeamAlias] = &[
    TeamAlias { id: "Diamondbacks", aliases: &["arizona diamondbacks", "arizona", "dbacks", "d-backs", "ari"] },
    TeamAlias { id: "Braves", aliases: &["atlanta braves", "atlanta", "atl"] },
    TeamAlias { id: "Orioles", aliases: &["baltimore orioles", "baltimore", "o's", "bal"] },
    TeamAlias { id: "Red Sox", aliases: &["boston red sox", "boston", "bos"] },
    TeamAlias { id: "Cubs", aliases: &["chicago cubs", "chc"] },
    TeamAlias { id: "White Sox", aliases: &["chicago white sox", "chw", "cws"] },
    TeamAlias { id: "Reds", aliases: &["cincinnati reds", "cincinnati", "cin"] },
    TeamAlias { id: "Guardians", aliases: &["cleveland guardians", "cleveland", "cle"] },
    TeamAlias { id: "Rockies", aliases: &["colorado rockies", "colorado", "col"] },
    TeamAlias { id: "Tigers", aliases: &["detroit tigers", "detroit", "det"] },
    TeamAlias { id: "Astros", aliases: &["houston astros", "houston", "hou"] },
    TeamAlias { id: "Royals", aliases: &["kansas city royals", "kansas city", "kc"] },
    TeamAlias { id: "Angels", aliases: &["los angeles angels", "la angels", "anaheim angels", "laa"] },
    TeamAlias { id: "Dodgers", aliases: &["los angeles dodgers", "la dodgers", "l.a. dodgers", "lad"] },
    TeamAlias { id: "Marlins", aliases: &["miami marlins", "miami", "mia"] },
    TeamAlias { id: "Brewers", aliases: &["milwaukee brewers", "milwaukee", "mil"] },
    TeamAlias { id: "Twins", aliases: &["minnesota twins", "minnesota", "min"] },
    TeamAlias { id: "Mets", aliases: &["new york mets", "ny mets", "nym"] },
    TeamAlias { id: "Yankees", aliases: &["new york yankees", "ny yankees", "yanks", "nyy"] },
    TeamAlias { id: "Athletics", aliases: &["oakland athletics", "oakland", "a's", "ath"] },
    TeamAlias { id: "Phillies", aliases: &["philadelphia phillies", "philadelphia", "philly", "phi"] },
    TeamAlias { id: "Pirates", aliases: &["pittsburgh pirates", "pittsburgh", "pit"] },
    TeamAlias { id: "Padres", aliases: &["san diego padres", "san diego", "sd"] },
    TeamAlias { id: "Giants", aliases: &["san francisco giants", "san francisco", "sf"] },
    TeamAlias { id: "Mariners", aliases: &["seattle mariners", "seattle", "sea"] },
    TeamAlias { id: "Cardinals", aliases: &["st louis cardinals", "st. louis cardinals", "st louis", "stl"] },
    TeamAlias { id: "Rays", aliases: &["tampa bay rays", "tampa bay", "tb"] },
    TeamAlias { id: "Rangers", aliases: &["texas rangers", "texas", "tex"] },
    TeamAlias { id: "Blue Jays", aliases: &["toronto blue jays", "toronto", "jays", "tor"] },
    TeamAlias { id: "Nationals", aliases: &["washington nationals", "washington", "nats", "wsh"] },
];

pub const NHL_TEAMS: &[TeamAlias] = &[
    TeamAlias { id: "Ducks", aliases: &["anaheim ducks", "anaheim", "ana"] },
    TeamAlias { id: "Bruins", aliases: &["boston bruins", "boston", "bos"] },
    TeamAlias { id: "Sabres", aliases: &["buffalo sabres", "buffalo", "buf"] },
    TeamAlias { id: "Flames", aliases: &["calgary flames", "calgary", "cgy"] },
    TeamAlias { id: "Hurricanes", aliases: &["carolina hurricanes", "carolina", "canes", "car"] },
    TeamAlias { id: "Blackhawks", aliases: &["chicago blackhawks", "chicago", "chi"] },
    TeamAlias { id: "Avalanche", aliases: &["colorado avalanche", "colorado", "avs", "col"] },
    TeamAlias { id: "Blue Jackets", aliases: &["columbus blue jackets", "columbus", "cbj"] },
    TeamAlias { id: "Stars", aliases: &["dallas stars", "dallas", "dal"] },
    TeamAlias { id: "Red Wings", aliases: &["detroit red wings", "detroit", "det"] },
    TeamAlias { id: "Oilers", aliases: &["edmonton oilers", "edmonton", "edm"] },
    TeamAlias { id: "Panthers", aliases: &["florida panthers", "florida", "fla"] },
    TeamAlias { id: "Kings", aliases: &["los angeles kings", "la kings", "l.a. kings", "lak"] },
    TeamAlias { id: "Wild", aliases: &["minnesota wild", "minnesota", "min"] },
    TeamAlias { id: "Canadiens", aliases: &["montreal canadiens", "montreal", "habs", "mtl"] },
    TeamAlias { id: "Predators", aliases: &["nashville predators", "nashville", "preds", "nsh"] },
    TeamAlias { id: "Devils", aliases: &["new jersey devils", "new jersey", "njd", "nj"] },
    TeamAlias { id: "Islanders", aliases: &["new york islanders", "ny islanders", "isles", "nyi"] },
    TeamAlias { id: "Rangers", aliases: &["new york rangers", "ny rangers", "nyr"] },
    TeamAlias { id: "Senators", aliases: &["ottawa senators", "ottawa", "sens", "ott"] },
    TeamAlias { id: "Flyers", aliases: &["philadelphia flyers", "philadelphia", "phi"] },
    TeamAlias { id: "Penguins", aliases: &["pittsburgh penguins", "pittsburgh", "pens", "pit"] },
    TeamAlias { id: "Sharks", aliases: &["san jose sharks", "san jose", "sjs", "sj"] },
    TeamAlias { id: "Kraken", aliases: &["seattle kraken", "seattle", "sea"] },
    TeamAlias { id: "Blues", aliases: &["st louis blues", "st. louis blues", "st louis", "stl"] },
    TeamAlias { id: "Lightning", aliases: &["tampa bay lightning", "tampa bay", "bolts", "tbl"] },
    TeamAlias { id: "Maple Leafs", aliases: &["toronto maple leafs", "toronto", "leafs", "tor"] },
    TeamAlias { id: "Mammoth", aliases: &["utah mammoth", "utah hockey club", "utah", "uta"] },
    TeamAlias { id: "Canucks", aliases: &["vancouver canucks", "vancouver", "van"] },
    TeamAlias { id: "Golden Knights", aliases: &["vegas golden knights", "vegas", "las vegas", "vgk"] },
    TeamAlias { id: "Capitals", aliases: &["washington capitals", "washington", "caps", "wsh"] },
    TeamAlias { id: "Jets", aliases: &["winnipeg jets", "winnipeg", "wpg"] },
];

// College tables cover the programs that actually show up in capper feeds;
// gaps surface via the schedule filter's rejected list and get added here.

pub const NCAAF_TEAMS: &[TeamAlias] = &[
    TeamAlias { id: "Alabama", aliases: &["alabama crimson tide", "crimson tide", "bama"] },
    TeamAlias { id: "Clemson", aliases: &["clemson tigers"] },
    TeamAlias { id: "Georgia", aliases: &["georgia bulldogs", "uga"] },
    TeamAlias { id: "LSU", aliases: &["lsu tigers", "louisiana state"] },
    TeamAlias { id: "Michigan", aliases: &["michigan wolverines", "wolverines"] },
    TeamAlias { id: "Notre Dame", aliases: &["notre dame fighting irish", "fighting irish", "nd"] },
    TeamAlias { id: "Ohio State", aliases: &["ohio state buckeyes", "buckeyes", "osu"] },
    TeamAlias { id: "Oklahoma", aliases: &["oklahoma sooners", "sooners", "ou"] },
    TeamAlias { id: "Oregon", aliases: &["oregon ducks"] },
    TeamAlias { id: "Penn State", aliases: &["penn state nittany lions", "nittany lions", "psu"] },
    TeamAlias { id: "Texas", aliases: &["texas longhorns", "longhorns"] },
    TeamAlias { id: "USC", aliases: &["usc trojans", "southern california", "trojans"] },
];

pub const NCAAB_TEAMS: &[TeamAlias] = &[
    TeamAlias { id: "Arizona", aliases: &["arizona wildcats"] },
    TeamAlias { id: "Baylor", aliases: &["baylor bears"] },
    TeamAlias { id: "Duke", aliases: &["duke blue devils", "blue devils"] },
    TeamAlias { id: "Gonzaga", aliases: &["gonzaga bulldogs", "zags"] },
    TeamAlias { id: "Houston", aliases: &["houston cougars"] },
    TeamAlias { id: "Kansas", aliases: &["kansas jayhawks", "jayhawks", "ku"] },
    TeamAlias { id: "Kentucky", aliases: &["kentucky wildcats", "uk"] },
    TeamAlias { id: "Michigan State", aliases: &["michigan state spartans", "spartans", "msu"] },
    TeamAlias { id: "North Carolina", aliases: &["north carolina tar heels", "tar heels", "unc"] },
    TeamAlias { id: "Purdue", aliases: &["purdue boilermakers", "boilermakers"] },
    TeamAlias { id: "UConn", aliases: &["uconn huskies", "connecticut", "connecticut huskies"] },
    TeamAlias { id: "Villanova", aliases: &["villanova wildcats", "nova"] },
];
