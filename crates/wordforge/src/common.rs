//! Reference list of leaked passwords that show up in nearly every breach dump.

/// Known common passwords, merged verbatim or enforced on request.
pub const COMMON_PASSWORDS: &[&str] = &[
    "123456", "123456789", "password", "12345678", "qwerty", "12345", "1234567890", "111111",
    "1234567", "sunshine", "qwerty123", "iloveyou", "princess", "admin", "welcome", "666666",
    "abc123", "football", "123123", "monkey", "654321", "charlie", "aa123456", "donald",
    "password1", "qwerty1", "letmein", "dragon", "baseball", "superman", "michael", "shadow",
    "master", "killer", "trustno1", "jordan", "jennifer", "zxcvbnm", "asdfgh", "hunter", "buster",
    "soccer", "harley", "batman", "andrew", "tigger", "sunshine1", "iloveyou1", "hello", "freedom",
    "whatever", "qazwsx", "6543210", "7777777", "passw0rd", "maggie", "159753", "aaaaaa", "ginger",
    "princesa", "pepper", "11111111", "131313", "matthew", "ashley", "nicole", "chelsea", "biteme",
    "soccer1", "mickey", "bailey", "access", "flower", "hannah", "robert", "cowboy", "joshua",
    "thomas", "andrea", "tiffany", "jasmine", "liverpool", "taylor", "morgan", "qwertyuiop",
    "hottie", "ginger1", "chelseA123", "peanut", "mustang", "maverick", "987654321", "spiderman",
    "qwert", "abcd1234", "147258369", "159357", "donald1", "lovely", "112233", "2000", "2001",
    "2002", "2003", "2004",
];
