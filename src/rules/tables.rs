//! Tabulated Gauss-Legendre and Gauss-Kronrod coefficients.
//!
//! Every rule is symmetric about the origin, so only the non-negative half is stored: pairs of
//! `(node, weight)` ordered from the largest node down to the smallest, which is zero for rules
//! with an odd number of points. The full rule is obtained by mirroring the stored half.
#![allow(clippy::unreadable_literal)]

/// Gauss-Legendre rules of orders 1 to 11.
pub(crate) const LEGENDRE: [&[(f64, f64)]; 11] = [
    // 1 point
    &[(0.0, 2.0)],
    // 2 points
    &[(0.5773502691896257, 1.0)],
    // 3 points
    &[
        (0.7745966692414834, 0.5555555555555556),
        (0.0, 0.8888888888888888),
    ],
    // 4 points
    &[
        (0.8611363115940526, 0.34785484513745385),
        (0.33998104358485626, 0.6521451548625461),
    ],
    // 5 points
    &[
        (0.906179845938664, 0.23692688505618908),
        (0.5384693101056831, 0.47862867049936647),
        (0.0, 0.5688888888888889),
    ],
    // 6 points
    &[
        (0.932469514203152, 0.17132449237917036),
        (0.6612093864662645, 0.3607615730481386),
        (0.2386191860831969, 0.46791393457269104),
    ],
    // 7 points
    &[
        (0.9491079123427585, 0.1294849661688697),
        (0.7415311855993945, 0.27970539148927664),
        (0.4058451513773972, 0.3818300505051189),
        (0.0, 0.4179591836734694),
    ],
    // 8 points
    &[
        (0.9602898564975363, 0.10122853629037626),
        (0.7966664774136267, 0.22238103445337448),
        (0.525532409916329, 0.31370664587788727),
        (0.1834346424956498, 0.362683783378362),
    ],
    // 9 points
    &[
        (0.9681602395076261, 0.08127438836157441),
        (0.8360311073266358, 0.1806481606948574),
        (0.6133714327005904, 0.26061069640293544),
        (0.3242534234038089, 0.31234707704000286),
        (0.0, 0.3302393550012598),
    ],
    // 10 points
    &[
        (0.9739065285171717, 0.06667134430868814),
        (0.8650633666889845, 0.1494513491505806),
        (0.6794095682990244, 0.21908636251598204),
        (0.4333953941292472, 0.26926671930999635),
        (0.14887433898163122, 0.29552422471475287),
    ],
    // 11 points
    &[
        (0.978228658146057, 0.05566856711617366),
        (0.8870625997680953, 0.1255803694649046),
        (0.7301520055740494, 0.18629021092773426),
        (0.5190961292068118, 0.23319376459199048),
        (0.26954315595234496, 0.26280454451024665),
        (0.0, 0.2729250867779006),
    ],
];

/// Gauss-Kronrod extensions of the Gauss-Legendre rules of orders 1 to 11, with `2n + 1` points
/// each.
pub(crate) const KRONROD: [&[(f64, f64)]; 11] = [
    // 3 points
    &[
        (0.7745966692414834, 0.5555555555555556),
        (0.0, 0.8888888888888888),
    ],
    // 5 points
    &[
        (0.9258200997725514, 0.19797979797979798),
        (0.5773502691896257, 0.4909090909090909),
        (0.0, 0.6222222222222222),
    ],
    // 7 points
    &[
        (0.9604912687080203, 0.10465622602646726),
        (0.7745966692414834, 0.26848808986833345),
        (0.43424374934680254, 0.40139741477596225),
        (0.0, 0.45091653865847414),
    ],
    // 9 points
    &[
        (0.9765602507375731, 0.06297737366547301),
        (0.8611363115940526, 0.17005360533572272),
        (0.64028621749631, 0.26679834045228445),
        (0.33998104358485626, 0.32694918960145164),
        (0.0, 0.34644298189013634),
    ],
    // 11 points
    &[
        (0.9840853600948425, 0.04258203675108183),
        (0.906179845938664, 0.1152333166224734),
        (0.7541667265708493, 0.18680079655649265),
        (0.5384693101056831, 0.2410403392286476),
        (0.2796304131617832, 0.2728498019125589),
        (0.0, 0.2829874178574912),
    ],
    // 13 points
    &[
        (0.9887032026126789, 0.03039615411981977),
        (0.932469514203152, 0.08369444044690663),
        (0.8213733408650279, 0.13732060463444692),
        (0.6612093864662645, 0.18107199432313761),
        (0.4631182124753046, 0.21320965227196229),
        (0.2386191860831969, 0.2337708641169944),
        (0.0, 0.24107258017346475),
    ],
    // 15 points
    &[
        (0.9914553711208126, 0.022935322010529224),
        (0.9491079123427585, 0.06309209262997856),
        (0.8648644233597691, 0.10479001032225019),
        (0.7415311855993945, 0.14065325971552592),
        (0.5860872354676911, 0.1690047266392679),
        (0.4058451513773972, 0.19035057806478542),
        (0.20778495500789848, 0.20443294007529889),
        (0.0, 0.20948214108472782),
    ],
    // 17 points
    &[
        (0.9933798758817162, 0.017822383320710355),
        (0.9602898564975363, 0.04943939500213931),
        (0.8941209068474564, 0.08248229893135833),
        (0.7966664774136267, 0.11164637082683962),
        (0.6723540709451586, 0.1362631092551722),
        (0.525532409916329, 0.1566526061681884),
        (0.36070109792813193, 0.1720706085552113),
        (0.1834346424956498, 0.18140002506803465),
        (0.0, 0.18444640574469165),
    ],
    // 19 points
    &[
        (0.9946781606773403, 0.014304775643838938),
        (0.9681602395076261, 0.039631895160261256),
        (0.9149635072496779, 0.06651815594027415),
        (0.8360311073266358, 0.0907906816887264),
        (0.7344867651839337, 0.11178913468441827),
        (0.6133714327005904, 0.1300014068553412),
        (0.47546247911245987, 0.14523958838436615),
        (0.3242534234038089, 0.15641352778848386),
        (0.16422356361498677, 0.16286282744011507),
        (0.0, 0.16489601282834943),
    ],
    // 21 points
    &[
        (0.9956571630258081, 0.011694638867371874),
        (0.9739065285171717, 0.032558162307964725),
        (0.9301574913557082, 0.054755896574351995),
        (0.8650633666889845, 0.07503967481091996),
        (0.7808177265864169, 0.0931254545836976),
        (0.6794095682990244, 0.10938715880229764),
        (0.5627571346686047, 0.12349197626206584),
        (0.4333953941292472, 0.13470921731147334),
        (0.2943928627014602, 0.14277593857706009),
        (0.14887433898163122, 0.14773910490133849),
        (0.0, 0.1494455540029169),
    ],
    // 23 points
    &[
        (0.9963696138895426, 0.009765441045960757),
        (0.978228658146057, 0.02715655468210426),
        (0.941677108578068, 0.04582937856442642),
        (0.8870625997680953, 0.0630974247503749),
        (0.816057456656221, 0.07866457193222733),
        (0.7301520055740494, 0.09295309859690083),
        (0.6305995201619651, 0.1058720744813894),
        (0.5190961292068118, 0.11673950246104726),
        (0.39794414095237757, 0.12515879910031952),
        (0.26954315595234496, 0.13128068422980566),
        (0.1361130007993618, 0.13519357279988453),
        (0.0, 0.1365777947111183),
    ],
];
