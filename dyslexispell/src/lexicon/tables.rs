//! Built-in correction tables.
//!
//! Keys are lowercase. A key appears in at most one of `PHONETIC`, `REVERSAL`
//! and `TYPOS`; it may additionally appear in `HOMOPHONES`.

/// Words spelled the way they sound: `(error, correction, tip)`.
pub(crate) static PHONETIC: &[(&str, &str, &str)] = &[
    ("frend", "friend", "Friend has a silent 'i': fr-i-end."),
    ("frends", "friends", "Friends has a silent 'i': fr-i-ends."),
    ("becuase", "because", "Break it up: be-cause."),
    ("becos", "because", "Break it up: be-cause."),
    ("becaus", "because", "Break it up: be-cause."),
    ("becoz", "because", "Break it up: be-cause."),
    ("wos", "was", "Was is spelled with an 'a', even though it sounds like 'o'."),
    ("woz", "was", "Was is spelled with an 'a' and an 's'."),
    ("wuz", "was", "Was is spelled with an 'a' and an 's'."),
    ("sed", "said", "Said is spelled with 'ai', even though it sounds like 'e'."),
    ("sez", "says", "Says is spelled with 'ay' and an 's'."),
    ("enuf", "enough", "The 'f' sound at the end is spelled 'gh': enough."),
    ("enuff", "enough", "The 'f' sound at the end is spelled 'gh': enough."),
    ("thay", "they", "They ends in 'ey'."),
    ("wen", "when", "Question words often start with 'wh': when."),
    ("wot", "what", "Question words often start with 'wh': what."),
    ("wat", "what", "Question words often start with 'wh': what."),
    ("shud", "should", "Should has a silent 'l': sh-ou-l-d."),
    ("wud", "would", "Would has a silent 'l': w-ou-l-d."),
    ("coud", "could", "Could has a silent 'l': c-ou-l-d."),
    ("cood", "could", "Could has a silent 'l': c-ou-l-d."),
    ("peple", "people", "People has a silent 'o': pe-o-ple."),
    ("peepul", "people", "People is spelled p-e-o-p-l-e."),
    ("skool", "school", "The 'k' sound in school is spelled 'ch'."),
    ("sckool", "school", "The 'k' sound in school is spelled 'ch'."),
    ("fone", "phone", "The 'f' sound in phone is spelled 'ph'."),
    ("foto", "photo", "The 'f' sound in photo is spelled 'ph'."),
    ("fotograf", "photograph", "The 'f' sounds in photograph are spelled 'ph'."),
    ("nite", "night", "Night has a silent 'gh': n-igh-t."),
    ("brite", "bright", "Bright has a silent 'gh': br-igh-t."),
    ("fite", "fight", "Fight has a silent 'gh': f-igh-t."),
    ("rong", "wrong", "Wrong starts with a silent 'w'."),
    ("ritten", "written", "Written starts with a silent 'w'."),
    ("nolege", "knowledge", "Knowledge starts with a silent 'k' and has a 'd' before the 'ge'."),
    ("nowlege", "knowledge", "Knowledge starts with a silent 'k' and has a 'd' before the 'ge'."),
    ("nife", "knife", "Knife starts with a silent 'k'."),
    ("lern", "learn", "Learn is spelled with 'ea': l-ea-rn."),
    ("laf", "laugh", "The 'f' sound in laugh is spelled 'gh'."),
    ("laff", "laugh", "The 'f' sound in laugh is spelled 'gh'."),
    ("lafing", "laughing", "The 'f' sound in laughing is spelled 'gh'."),
    ("tuff", "tough", "The 'f' sound in tough is spelled 'gh'."),
    ("cof", "cough", "The 'f' sound in cough is spelled 'gh'."),
    ("coff", "cough", "The 'f' sound in cough is spelled 'gh'."),
    ("wer", "were", "Were ends with a silent 'e'."),
    ("wur", "were", "Were is spelled w-e-r-e."),
    ("agen", "again", "Again is spelled with 'ai': ag-ai-n."),
    ("agin", "again", "Again is spelled with 'ai': ag-ai-n."),
    ("luv", "love", "Love is spelled with an 'o' and ends with a silent 'e'."),
    ("hav", "have", "English words rarely end in 'v'; add an 'e': have."),
    ("giv", "give", "English words rarely end in 'v'; add an 'e': give."),
    ("liv", "live", "English words rarely end in 'v'; add an 'e': live."),
    ("ov", "of", "Of is spelled with an 'f', even though it sounds like 'v'."),
    ("uv", "of", "Of is spelled o-f."),
    ("bewtiful", "beautiful", "Beautiful starts with 'beau': beau-ti-ful."),
    ("butiful", "beautiful", "Beautiful starts with 'beau': beau-ti-ful."),
    ("beutiful", "beautiful", "Beautiful starts with 'beau': beau-ti-ful."),
    ("dificult", "difficult", "Difficult has a double 'f': dif-fi-cult."),
    ("difrent", "different", "Break it up: dif-fer-ent."),
    ("diffrent", "different", "Break it up: dif-fer-ent."),
    ("intresting", "interesting", "Break it up: in-ter-est-ing."),
    ("probly", "probably", "Break it up: prob-ab-ly."),
    ("probaly", "probably", "Break it up: prob-ab-ly."),
    ("libary", "library", "Library has two r's: li-br-ar-y."),
    ("seperate", "separate", "There is 'a rat' in separate."),
    ("definately", "definitely", "Definitely contains the word 'finite'."),
    ("definatly", "definitely", "Definitely contains the word 'finite'."),
    ("nessesary", "necessary", "One collar, two sleeves: one 'c', two 's'."),
    ("neccessary", "necessary", "One collar, two sleeves: one 'c', two 's'."),
    ("wich", "which", "Which starts with 'wh'."),
    ("tomorow", "tomorrow", "Tomorrow has one 'm' and two r's."),
    ("tommorow", "tomorrow", "Tomorrow has one 'm' and two r's."),
    ("tommorrow", "tomorrow", "Tomorrow has one 'm' and two r's."),
    ("somthing", "something", "Something is 'some' + 'thing'."),
    ("sumthing", "something", "Something is 'some' + 'thing'."),
    ("minit", "minute", "Minute is spelled min-ute."),
    ("thoght", "thought", "Thought is spelled with 'ough': th-ough-t."),
    ("thort", "thought", "Thought is spelled with 'ough': th-ough-t."),
    ("ansa", "answer", "Answer has a silent 'w': an-s-w-er."),
    ("anser", "answer", "Answer has a silent 'w': an-s-w-er."),
    ("shure", "sure", "Sure starts with just 's', even though it sounds like 'sh'."),
    ("shugar", "sugar", "Sugar starts with just 's', even though it sounds like 'sh'."),
    ("oshun", "ocean", "The 'sh' sound in ocean is spelled 'ce'."),
    ("stashun", "station", "The 'shun' sound at the end is usually spelled 'tion'."),
    ("nashun", "nation", "The 'shun' sound at the end is usually spelled 'tion'."),
    ("speshal", "special", "The 'sh' sound in special is spelled 'ci'."),
    ("lisen", "listen", "Listen has a silent 't': lis-t-en."),
    ("lissen", "listen", "Listen has a silent 't': lis-t-en."),
    ("wonce", "once", "Once starts with an 'o', even though it sounds like 'w'."),
    ("wun", "one", "One starts with an 'o', even though it sounds like 'w'."),
    ("tung", "tongue", "Tongue ends with a silent 'ue'."),
    ("yot", "yacht", "Yacht has a silent 'ch'."),
    ("recieve", "receive", "'i' before 'e', except after 'c'."),
    ("reciept", "receipt", "'i' before 'e', except after 'c'; the 'p' is silent."),
    ("wierd", "weird", "Weird breaks the 'i before e' rule."),
    ("gost", "ghost", "Ghost has a silent 'h' after the 'g'."),
    ("gess", "guess", "Guess has a silent 'u' after the 'g'."),
    ("bilding", "building", "Building has a silent 'u': b-u-ilding."),
    ("iland", "island", "Island has a silent 's'."),
    ("dout", "doubt", "Doubt has a silent 'b'."),
    ("thum", "thumb", "Thumb ends with a silent 'b'."),
    ("colum", "column", "Column ends with a silent 'n'."),
    ("cort", "caught", "Caught is spelled with 'augh': c-augh-t."),
    ("tawt", "taught", "Taught is spelled with 'augh': t-augh-t."),
    ("dorter", "daughter", "Daughter is spelled with 'augh': d-augh-ter."),
    ("wimin", "women", "Women is spelled w-o-m-e-n."),
    ("bizness", "business", "Business is 'busy' + 'ness'."),
    ("buisness", "business", "Business is 'busy' + 'ness'."),
];

/// Visually mirrored letters and flipped letter order: `(error, correction, tip)`.
pub(crate) static REVERSAL: &[(&str, &str, &str)] = &[
    ("doy", "boy", "Check your b and d: 'b' has its belly on the right."),
    ("dook", "book", "Check your b and d: 'b' has its belly on the right."),
    ("dack", "back", "Check your b and d: 'b' has its belly on the right."),
    ("dlue", "blue", "Check your b and d: 'b' has its belly on the right."),
    ("dird", "bird", "Check your b and d: 'b' has its belly on the right."),
    ("dall", "ball", "Check your b and d: 'b' has its belly on the right."),
    ("doat", "boat", "Check your b and d: 'b' has its belly on the right."),
    ("dest", "best", "Check your b and d: 'b' has its belly on the right."),
    ("dus", "bus", "Check your b and d: 'b' has its belly on the right."),
    ("dut", "but", "Check your b and d: 'b' has its belly on the right."),
    ("bady", "baby", "Check your b and d: 'b' has its belly on the right."),
    ("dedroom", "bedroom", "Check your b and d: 'b' has its belly on the right."),
    ("dreak", "break", "Check your b and d: 'b' has its belly on the right."),
    ("bown", "down", "Check your b and d: 'd' has its belly on the left."),
    ("bidn't", "didn't", "Check your b and d: 'd' has its belly on the left."),
    ("boesn't", "doesn't", "Check your b and d: 'd' has its belly on the left."),
    ("bon't", "don't", "Check your b and d: 'd' has its belly on the left."),
    ("bance", "dance", "Check your b and d: 'd' has its belly on the left."),
    ("binner", "dinner", "Check your b and d: 'd' has its belly on the left."),
    ("qut", "put", "Check your p and q: 'p' has its tail on the left."),
    ("qull", "pull", "Check your p and q: 'p' has its tail on the left."),
    ("qark", "park", "Check your p and q: 'p' has its tail on the left."),
    ("qen", "pen", "Check your p and q: 'p' has its tail on the left."),
    ("qig", "pig", "Check your p and q: 'p' has its tail on the left."),
    ("qlay", "play", "Check your p and q: 'p' has its tail on the left."),
    ("pueen", "queen", "Check your p and q: 'q' has its tail on the right."),
    ("puick", "quick", "Check your p and q: 'q' has its tail on the right."),
    ("puiet", "quiet", "Check your p and q: 'q' has its tail on the right."),
    ("puestion", "question", "Check your p and q: 'q' has its tail on the right."),
    ("nad", "and", "The letters are in the wrong order: a-n-d."),
    ("gril", "girl", "The letters are in the wrong order: g-i-r-l."),
    ("brid", "bird", "The letters are in the wrong order: b-i-r-d."),
    ("siad", "said", "The letters are in the wrong order: s-a-i-d."),
];

/// Common keyboard slips: `(error, correction)`.
pub(crate) static TYPOS: &[(&str, &str)] = &[
    ("teh", "the"),
    ("hte", "the"),
    ("adn", "and"),
    ("taht", "that"),
    ("thta", "that"),
    ("waht", "what"),
    ("wiht", "with"),
    ("jsut", "just"),
    ("konw", "know"),
    ("knwo", "know"),
    ("tihs", "this"),
    ("thsi", "this"),
    ("yuo", "you"),
    ("yoru", "your"),
    ("ahve", "have"),
    ("hvae", "have"),
    ("dont", "don't"),
    ("didnt", "didn't"),
    ("doesnt", "doesn't"),
    ("isnt", "isn't"),
    ("wasnt", "wasn't"),
    ("couldnt", "couldn't"),
    ("wouldnt", "wouldn't"),
    ("shouldnt", "shouldn't"),
    ("thier", "their"),
    ("alot", "a lot"),
    ("untill", "until"),
    ("occured", "occurred"),
    ("beleive", "believe"),
    ("freind", "friend"),
    ("goign", "going"),
    ("thnak", "thank"),
    ("thnaks", "thanks"),
    ("pepole", "people"),
    ("poeple", "people"),
    ("liek", "like"),
    ("lkie", "like"),
    ("mkae", "make"),
    ("amke", "make"),
    ("nto", "not"),
    ("whcih", "which"),
    ("wnat", "want"),
    ("abotu", "about"),
    ("baout", "about"),
    ("realy", "really"),
    ("truely", "truly"),
    ("becasue", "because"),
    ("wehn", "when"),
    ("somethign", "something"),
];

/// Words that sound alike: `(word, alternatives, tip)`.
pub(crate) static HOMOPHONES: &[(&str, &[&str], &str)] = &[
    ("their", &["there", "they're"], "Their = belongs to them. There = a place. They're = they are."),
    ("there", &["their", "they're"], "There = a place. Their = belongs to them. They're = they are."),
    ("they're", &["their", "there"], "They're = they are. Their = belongs to them. There = a place."),
    ("your", &["you're"], "Your = belongs to you. You're = you are."),
    ("you're", &["your"], "You're = you are. Your = belongs to you."),
    ("its", &["it's"], "Its = belongs to it. It's = it is."),
    ("it's", &["its"], "It's = it is. Its = belongs to it."),
    ("to", &["too", "two"], "To = towards. Too = also or very. Two = the number 2."),
    ("too", &["to", "two"], "Too = also or very. To = towards. Two = the number 2."),
    ("two", &["to", "too"], "Two = the number 2. To = towards. Too = also or very."),
    ("hear", &["here"], "Hear = with your ear. Here = this place."),
    ("here", &["hear"], "Here = this place. Hear = with your ear."),
    ("whose", &["who's"], "Whose = belongs to whom. Who's = who is."),
    ("who's", &["whose"], "Who's = who is. Whose = belongs to whom."),
    ("know", &["no"], "Know = understand. No = the opposite of yes."),
    ("no", &["know"], "No = the opposite of yes. Know = understand."),
    ("new", &["knew"], "New = not old. Knew = past of know."),
    ("knew", &["new"], "Knew = past of know. New = not old."),
    ("write", &["right"], "Write = put words on paper. Right = correct, or the opposite of left."),
    ("right", &["write"], "Right = correct, or the opposite of left. Write = put words on paper."),
    ("where", &["wear"], "Where = which place. Wear = put on clothes."),
    ("wear", &["where"], "Wear = put on clothes. Where = which place."),
    ("weather", &["whether"], "Weather = rain or sun. Whether = if."),
    ("whether", &["weather"], "Whether = if. Weather = rain or sun."),
    ("by", &["buy", "bye"], "By = next to, or done by. Buy = pay for. Bye = goodbye."),
    ("buy", &["by", "bye"], "Buy = pay for. By = next to, or done by. Bye = goodbye."),
    ("bye", &["by", "buy"], "Bye = goodbye. By = next to, or done by. Buy = pay for."),
    ("for", &["four"], "For = intended for. Four = the number 4."),
    ("four", &["for"], "Four = the number 4. For = intended for."),
    ("one", &["won"], "One = the number 1. Won = past of win."),
    ("won", &["one"], "Won = past of win. One = the number 1."),
    ("see", &["sea"], "See = with your eyes. Sea = the ocean."),
    ("sea", &["see"], "Sea = the ocean. See = with your eyes."),
    ("peace", &["piece"], "Peace = calm. Piece = a part of something."),
    ("piece", &["peace"], "Piece = a part of something. Peace = calm."),
    ("break", &["brake"], "Break = smash or pause. Brake = makes a vehicle stop."),
    ("brake", &["break"], "Brake = makes a vehicle stop. Break = smash or pause."),
    ("week", &["weak"], "Week = seven days. Weak = not strong."),
    ("weak", &["week"], "Weak = not strong. Week = seven days."),
    ("hole", &["whole"], "Hole = a gap. Whole = all of it."),
    ("whole", &["hole"], "Whole = all of it. Hole = a gap."),
    ("allowed", &["aloud"], "Allowed = permitted. Aloud = out loud."),
    ("aloud", &["allowed"], "Aloud = out loud. Allowed = permitted."),
    ("threw", &["through"], "Threw = past of throw. Through = in one side and out the other."),
    ("through", &["threw"], "Through = in one side and out the other. Threw = past of throw."),
    ("wait", &["weight"], "Wait = stay until. Weight = how heavy."),
    ("weight", &["wait"], "Weight = how heavy. Wait = stay until."),
    ("mail", &["male"], "Mail = letters and post. Male = a man or boy."),
    ("male", &["mail"], "Male = a man or boy. Mail = letters and post."),
    ("past", &["passed"], "Past = time gone by. Passed = past of pass."),
    ("passed", &["past"], "Passed = past of pass. Past = time gone by."),
    ("accept", &["except"], "Accept = receive. Except = leaving out."),
    ("except", &["accept"], "Except = leaving out. Accept = receive."),
    ("affect", &["effect"], "Affect = to change (verb). Effect = the result (noun)."),
    ("effect", &["affect"], "Effect = the result (noun). Affect = to change (verb)."),
];
