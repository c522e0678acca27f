// quote pools shown when the moon is stopped

pub const EN_QUOTES: &[&str] = &[
    "The moon does not fight. It waits, and the tide comes to it.",
    "Even the moon has phases. Rest is part of the orbit.",
    "Small steps still leave footprints.",
    "Shine with the light you have, not the light you wish you had.",
    "Every crater is a story of something that hit hard and stayed.",
    "You are allowed to be both a work in progress and a masterpiece.",
    "Look up more often.",
    "Darkness is only the part of the sky you have not explored yet.",
    "Keep turning. The bright side always comes around.",
    "Make a plan, then make a bigger one.",
    "Stars can't shine without darkness.",
    "A quiet mind hears the loudest ideas.",
    "Start where you are. Use what you have. Do what you can.",
    "The best view comes after the hardest climb.",
    "Go where the map runs out.",
    "Done is better than perfect.",
    "Gravity is just a suggestion to those who keep moving.",
    "Reflect the light, even if you don't make it.",
    "Curiosity is a compass that never points the same way twice.",
    "Aim for the moon. Land wherever you like.",
    "Your pace is still progress.",
    "Slow orbits still complete the circle.",
    "Tonight is a good night to begin.",
];

pub const TW_QUOTES: &[&str] = &[
    "月有陰晴圓缺，人生也是。",
    "慢慢來，比較快。",
    "抬頭看看，天空比煩惱大。",
    "今天的努力，是明天的光。",
    "別怕黑，星星只在黑夜出現。",
    "每個坑洞，都是撐過來的證明。",
    "走自己的路，繞一圈也是風景。",
    "先開始，再變好。",
    "心靜了，靈感就來了。",
    "再小的光，也能照亮一角。",
    "休息不是停下，是為了走更遠。",
    "把今天過好，就是最好的計畫。",
    "轉個彎，亮面就回來了。",
    "相信自己的節奏。",
    "今晚，適合出發。",
];
