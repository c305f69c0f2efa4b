//! Coefficient table for the large-mu uniform asymptotic expansion.
//!
//! Entry (j, k) holds the coefficients of the polynomial f_{j,k}(v) in
//! ascending powers of v = u^2; the matrix entry used by the expansion is
//! u^(j+2k) * f_{j,k}(v). Only the triangle j + k <= 16 is tabulated, which
//! is exactly the set of entries the expansion reads.

/// Dimension of the coefficient matrix (orders 0..=16 in each index).
pub(crate) const FJK_DIM: usize = 17;

/// (j, k, coefficients of f_{j,k} in ascending powers of v); degree j + 2k.
pub(crate) static FJK_POLY: [(usize, usize, &[f64]); 152] = [
    (1, 0, &[0.5, 1.0 / 6.0]),
    (2, 0, &[-0.125, 0.0, 2.083333333333333333333e-1]),
    (3, 0, &[
        0.0625, -0.54166666666666666667e-1, -0.31250000000000000000, 0.28935185185185185185
    ]),
    (4, 0, &[
        -0.39062500000000000000e-1, 0.83333333333333333333e-1, 0.36631944444444444444,
        -0.83333333333333333333, 0.42390046296296296296
    ]),
    (5, 0, &[
        0.27343750000000000000e-1, -0.10145089285714285714, -0.38281250000000000000,
        1.6061921296296296296, -1.7903645833333333333, 0.64144483024691358025
    ]),
    (6, 0, &[
        -0.20507812500000000000e-1, 0.11354166666666666667, 0.36983072916666666667,
        -2.5763888888888888889, 4.6821108217592592593, -3.5607638888888888889,
        0.99199861754115226337
    ]),
    (7, 0, &[
        0.16113281250000000000e-1, -0.12196955605158730159, -0.33297526041666666667,
        3.7101836350859788360, -9.7124626253858024691, 11.698143727494855967,
        -6.8153513213734567901, 1.5583573120284636488
    ]),
    (8, 0, &[
        -0.13092041015625000000e-1, 0.12801339285714285714, 0.27645252046130952381,
        -4.9738777281746031746, 17.501935105096726190, -29.549479166666666667,
        26.907133829250257202, -12.754267939814814815, 2.4771798425577632030
    ]),
    (9, 0, &[
        0.10910034179687500000e-1, -0.13242874035415539322, -0.20350690569196428571,
        6.3349384739790013228, -28.662114811111800044, 63.367483364421434083,
        -79.925485618811085391, 58.757341382271304870, -23.521455678429623200,
        3.9743166454849898231
    ]),
    (10, 0, &[
        -0.92735290527343750000e-2, 0.13569064670138888889, 0.11668911254144670021,
        -7.7625075954861111111, 43.784562625335567773, -121.31910738398368607,
        198.20121981295421734, -200.43673900016432327, 123.80342757950794259,
        -42.937783937667895519, 6.4238224989853211488
    ]),
    (11, 0, &[
        0.80089569091796875000e-2, -0.13811212730852318255, -0.18036238655211433532e-1,
        9.2275853445797140866, -63.433189058657045718, 213.60596888977804302,
        -432.96183396641609600, 563.58282810729226948, -476.64858951490111802,
        254.12602383553942414, -77.797248335368675787, 10.446593930548512362
    ]),
    (12, 0, &[
        -0.70078372955322265625e-2, 0.13990718736965074856, -0.90802493534784075207e-1,
        -10.703046719402920575, 88.139055705916160082, -352.55365414896970073,
        860.26747669490580229, -1381.3884907075539460, 1497.5262381375579615,
        -1089.5695395426785795, 511.32054028583482617, -140.15612725058882506,
        17.075450695147740963
    ]),
    (13, 0, &[
        0.61992406845092773438e-2, -0.14122658948520402530, 0.20847570003254474385,
        12.163573370672875144, -118.39689039212288489, 552.67487991757989471,
        -1587.5976792806460534, 3052.8623335041016490, -4067.0706975337409188,
        3781.4312193762993828, -2415.5306966669781670, 1012.7298787459738084,
        -251.37116645382357870, 28.031797071713952493
    ]),
    (14, 0, &[
        -0.55350363254547119141e-2, 0.14217921713372686883, -0.33386405994128191388,
        -13.585546133738642981, 154.66282442015249412, -830.71069930083407076,
        2761.0291182562342601, -6219.8351157050681259, 9888.1927799238643295,
        -11266.694472611704499, 9175.5017581920039296, -5225.7429703251833306,
        1980.4053574007652015, -449.21570290311749301, 46.189888661376921323
    ]),
    (15, 0, &[
        0.49815326929092407227e-2, -0.14284537645361756992, 0.46603144339556328292,
        14.946922390174830635, -197.35300817536964730, 1205.6532423474201960,
        -4572.9473467250314847, 11865.183572985041892, -22026.784993357215819,
        29873.206689727991728, -29749.925047590507307, 21561.076414337110462,
        -11081.438701085531999, 3832.1051284526998677, -800.40791995840375064,
        76.356879052900946470
    ]),
    (16, 0, &[
        -0.45145140029489994049e-2, 0.14328537051348750262, -0.60418804953366830816,
        -16.227111168548122706, 246.84286168977111296, -1698.7528990888950203,
        7270.2387180078329370, -21434.839860240815288, 45694.866035689911070,
        -72195.530107556687632, 85409.022842807474925, -75563.234444869051891,
        49344.501227769590532, -23110.149147008741710, 7349.7909384681412957,
        -1422.6485707704091767, 126.58493346342458430
    ]),
    (0, 1, &[0.12500000000000000000, 0.0, -0.20833333333333333333]),
    (1, 1, &[
        -0.62500000000000000000e-1, 0.14583333333333333333, 0.52083333333333333333,
        -0.65972222222222222222
    ]),
    (2, 1, &[
        0.46875000000000000000e-1, -0.25000000000000000000, -0.69791666666666666667,
        2.5000000000000000000, -1.6059027777777777778
    ]),
    (3, 1, &[
        -0.39062500000000000000e-1, 0.34218750000000000000, 0.72916666666666666667,
        -5.6712962962962962963, 8.1640625000000000000, -3.5238233024691358025
    ]),
    (4, 1, &[
        0.34179687500000000000e-1, -0.42708333333333333333, -0.59798177083333333333,
        10.208333333333333333, -24.385308159722222222, 22.482638888888888889,
        -7.3148750964506172840
    ]),
    (5, 1, &[
        -0.30761718750000000000e-1, 0.50665457589285714286, 0.29326171875000000000,
        -16.044663008432539683, 56.156774450231481481, -82.372823832947530864,
        56.160933883101851852, -14.669405462319958848
    ]),
    (6, 1, &[
        0.28198242187500000000e-1, -0.58203125000000000000, 0.19236328125000000000,
        23.032335069444444444, -110.33599717881944444, 227.74508101851851852,
        -243.01300676761831276, 131.66775173611111111, -28.734679254811814129
    ]),
    (7, 1, &[
        -0.26184082031250000000e-1, 0.65396069723462301587, -0.86386369977678571429,
        -30.956497628348214286, 194.54890778287588183, -527.74348743041776896,
        780.79702721113040123, -656.29672278886959877, 295.22178492918917181,
        -55.334928257039108939
    ]),
    (8, 1, &[
        0.24547576904296875000e-1, -0.72297712053571428571, 1.7246239871070498512,
        39.546341145833333333, -316.99617299397786458, 1081.5824590773809524,
        -2074.4037171674994144, 2398.8177766525205761, -1664.7533222350236974,
        640.37285196437757202, -105.19241070496638071
    ]),
    (9, 1, &[
        -0.23183822631835937500e-1, 0.78948182770700165720, -2.7769457196432446677,
        -48.483511725054617511, 486.26944746794524016, -2023.8687997794445650,
        4819.5203340475451309, -7173.8455521540386687, 6815.5497547693867415,
        -4029.1488859965138299, 1353.9765257894256969, -197.95866455017786514
    ]),
    (10, 1, &[
        0.22024631500244140625e-1, -0.85378706190321180556, 4.0223697649378354858,
        57.408728524667245370, -711.17788174487525874, 3529.7027186963924024,
        -10126.360073656459287, 18593.571833843032106, -22636.974191769862737,
        18256.758136740546277, -9401.7390963482140877, 2805.1309521324368189,
        -369.51173382133760772
    ]),
    (11, 1, &[
        -0.21023511886596679688e-1, 0.91614229084450603921, -5.4618897365663646792,
        -65.927090730899790043, 1000.5846459432155138, -5819.5104958244309663,
        19669.512303383909626, -43248.109984766956219, 64686.833219925562541,
        -66644.721592787005810, 46700.224876576248105, -21305.241783200054197,
        5716.0564388863858560, -685.13376643364457482
    ]),
    (12, 1, &[
        0.20147532224655151367e-1, -0.97675104265089158888, 7.0960977732520869186,
        73.612404446931816840, -1363.2529599857205103, 9163.5749605651064785,
        -35864.832027517679572, 92376.947946883135629, -164834.83784046136147,
        208040.74214864238663, -185789.85543054601897, 115101.05980498683057,
        -47134.497747406170101, 11488.455724263405622, -1263.2564781342309572
    ]),
    (13, 1, &[
        -0.19372627139091491699e-1, 1.0357822247248985273, -8.9252867409545555669,
        -80.010760848208515926, 1807.7010112763722305, -13886.239779926939526,
        62074.025784691064765, -184145.36258906485362, 383582.03973738516554,
        -576038.14802241650407, 628833.57177487054480, -495573.34466362548232,
        275136.26556037481059, -102207.94135045741701, 22823.518594320784899,
        -2318.1664194368241801
    ]),
    (14, 1, &[
        0.18680747598409652710e-1, -1.0933780262877533843, 10.949523517716476548,
        84.643531757174997082, -2342.0651134541361650, 20369.770814493525849,
        -102837.36670370684414, 346648.70123159565251, -828961.75261733863230,
        1449716.2069081751493, -1879301.2063630471735, 1807331.1927210534022,
        -1274496.0479553760313, 641015.88735632964269, -217895.35698164739918,
        44894.191761385746325, -4236.6734164587391641
    ]),
    (15, 1, &[
        -0.18058056011795997620e-1, 1.1496596058234620572, -13.168702574894088581,
        -87.009904621222723801, 2973.9704746271364310, -29057.863221639334277,
        164134.77797509230729, -621775.71008157787326, 1684395.4811437516714,
        -3374103.7733925392782, 5084254.0101088150007, -5797111.7426650438469,
        4981685.5893221501493, -3178510.0651440248351, 1461172.7927229457558,
        -457795.06653758949338, 87552.178162658627517, -7715.5318619797584859
    ]),
    (0, 2, &[
        0.70312500000000000000e-1, 0.0, -0.40104166666666666667, 0.0, 0.33420138888888888889
    ]),
    (1, 2, &[
        -0.10546875000000000000, 0.15234375000000000000, 1.4036458333333333333,
        -1.6710069444444444444, -1.8381076388888888889, 2.0609085648148148148
    ]),
    (2, 2, &[
        0.13183593750000000000, -0.42187500000000000000, -2.8623046875000000000,
        8.0208333333333333333, 1.0777994791666666667, -14.036458333333333333,
        8.0904586226851851852
    ]),
    (3, 2, &[
        -0.15380859375000000000, 0.79892578125000000000, 4.5903320312500000000,
        -22.751985677083333333, 14.934624565972222222, 42.526662567515432099,
        -65.691460503472222222, 25.746658387988683128
    ]),
    (4, 2, &[
        0.17303466796875000000, -1.2773437500000000000, -6.3615722656250000000,
        50.011935763888888889, -73.559339735243055556, -70.026331018518518519,
        271.34066056616512346, -242.71375868055555556, 72.412718470695087449
    ]),
    (5, 2, &[
        -0.19033813476562500000, 1.8524126325334821429, 7.9220947265625000000,
        -94.174715169270833333, 221.09830050998263889, 13.578712293836805556,
        -765.03722541714891975, 1204.5108913845486111, -777.22725008740837191,
        187.66711848589945559
    ]),
    (6, 2, &[
        0.20619964599609375000, -2.5202636718750000000, -8.9979495239257812500,
        159.65856119791666667, -527.02200527615017361, 337.21907552083333333,
        1618.7873626708984375, -4211.0382245852623457, 4434.1363497656886306,
        -2259.2768162856867284, 458.84770992088928362
    ]),
    (7, 2, &[
        -0.22092819213867187500, 3.2776113237653459821, 9.3003209795270647321,
        -250.77115683984504175, 1087.8174260457356771, -1404.3028911260910976,
        -2563.9444452795962738, 11622.495969086321293, -17934.344163614699543,
        14479.313178892270800, -6122.6397406024697386, 1074.0188194633057124
    ]),
    (8, 2, &[
        0.23473620414733886719, -4.1216033935546875000, -8.5290844099862234933,
        371.57630452473958333, -2030.4431650042155432, 3928.2498148600260417,
        2472.6031768756442600, -26784.706192883150077, 57707.467479758203765,
        -65779.375284558624561, 43428.755429000357378, -15731.921483001918296,
        2430.2098720207426574
    ]),
    (9, 2, &[
        -0.24777710437774658203, 5.0497246547178788619, 6.3753494648706345331,
        -525.77763195628211612, 3515.3901490500364354, -9098.9465854134383025,
        1501.4499341175879961, 52968.402569427411743, -156962.17039551999834,
        237710.55444046526561, -217889.76091367761240, 122183.02599420558225,
        -38765.366765003690558, 5352.0219072834891857
    ]),
    (10, 2, &[
        0.26016595959663391113, -6.0597300529479980469, -2.5233336282830660035,
        716.61609867398701017, -5739.3531518108567233, 18710.056678357368214,
        -15227.052778022872591, -90410.693429278463984, 374173.78606362103489,
        -726678.85908967426430, 867690.63613487545936, -669330.97296360068003,
        326923.43164094028666, -92347.975136788220980, 11528.702830431737704
    ]),
    (11, 2, &[
        -0.27199168503284454346, 7.1495960926884537810, -3.3482232633271774688,
        -946.77886875050071077, 8937.5223755513871158, -35337.290730230231910,
        49459.110954680523755, 130172.10642681313787, -799759.43622037315810,
        1951258.3781149473349, -2917568.5809228727915, 2902364.7717490216619,
        -1939009.9106363828308, 839993.29007310418975, -213947.07574365748020,
        24380.364047003816130
    ]),
    (12, 2, &[
        0.28332467190921306610, -8.3174842023230218268, 11.564968830087189329,
        1218.3176746274854345, -13385.506466376132701, 62540.301444639907312,
        -122382.91365675340023, -143089.29056273054521, 1554707.5273250397863,
        -4718379.1202435790866, 8605382.3882172381886, -10599895.885891960945,
        9077838.6492033673420, -5358306.8036736424269, 2087192.8797093735160,
        -484205.51887813298356, 50761.444989589644273
    ]),
    (13, 2, &[
        -0.29422177467495203018, 9.5617123863640260863, -22.456083202924761739,
        -1532.5752010328979216, 19400.899387993296528, -105087.87893355958488,
        262967.92353732330762, 61613.709412718183861, -2770349.5737553264845,
        10454840.708341905254, -22841191.197018135498, 33883152.513403664925,
        -35702419.891311431439, 26908321.887260639130, -14241918.449935481857,
        5042187.1772326832703, -1074259.7908211056482, 104287.72699173731366
    ]),
    (14, 2, &[
        0.30472969519905745983, -10.880732823367957230, 36.353598566849979929,
        1890.1183163422473995, -27344.503966626558254, 169206.00701162634518,
        -515265.57929420780237, 248217.18376755761876, 4532205.9690912962460,
        -21492951.405026820809, 55557247.108151935296, -97285892.160889723465,
        122607925.76741209887, -113234217.41453912066, 76312885.330872101297,
        -36634431.269047918012, 11891540.519643040965, -2342835.9225964451203,
        211794.47349942484210
    ]),
    (0, 3, &[
        0.73242187500000000000e-1, 0.0, -0.89121093750000000000, 0.0, 1.8464626736111111111,
        0.0, -1.0258125964506172840
    ]),
    (1, 3, &[
        -0.18310546875000000000, 0.23193359375000000000, 4.0104492187500000000,
        -4.6045898437500000000, -12.002007378472222222, 13.232982494212962963,
        8.7194070698302469136, -9.4032821341306584362
    ]),
    (2, 3, &[
        0.32043457031250000000, -0.87890625000000000000, -10.464160156250000000,
        26.736328125000000000, 29.225667317708333333, -103.40190972222222222,
        17.131070360725308642, 92.323133680555555556, -50.991434481899434156
    ]),
    (3, 3, &[
        -0.48065185546875000000, 2.1109008789062500000, 21.025415039062500000,
        -89.876334092881944444, -15.284450954861111111, 411.04911024305555556,
        -389.32152566792052469, -293.92095419801311728, 567.72315884813850309,
        -213.02470796338270176
    ]),
    (4, 3, &[
        0.66089630126953125000, -4.0893554687500000000, -36.043276468912760417,
        229.67792968750000000, -150.64704827202690972, -1115.0236545138888889,
        2175.9328758333936150, -176.78170412165637860, -2817.5643744553721654,
        2651.5545930587705761, -757.67687847693870206
    ]),
    (5, 3, &[
        -0.85916519165039062500, 6.9690023149762834821, 55.378133392333984375,
        -495.03058466109018477, 733.55991770426432292, 2262.8678469622576678,
        -7898.5588740407684703, 5695.1407000317985629, 7718.7923309734328784,
        -16089.784052072184022, 10424.896645958040967, -2413.3719004256171872
    ]),
    (6, 3, &[
        1.0739564895629882812, -10.898971557617187500, -78.354169082641601562,
        948.65802978515625000, -2219.4645106141832140, -3394.0875061035156250,
        22215.581371235788604, -30531.682191548916538, -6945.0954169277301051,
        63170.236743335697713, -72433.473359744190134, 36368.490166893057699,
        -7090.9841426397698721
    ]),
    (7, 3, &[
        -1.3040900230407714844, 16.023568312327067057, 103.72332413083031064,
        -1667.3156506674630301, 5406.6561977448034539, 2872.9832533515445770,
        -52104.157882492630570, 110439.44251210509668, -46659.137282813036883,
        -173333.53977304078369, 339551.86235951279889, -281181.85781749484440,
        116143.52270798282713, -19586.901426503340492
    ]),
    (8, 3, &[
        1.5486069023609161377, -22.482862472534179688, -129.63729095714432853,
        2741.6385669817243304, -11510.430102675971531, 3157.6331450774177672,
        105738.58606273177860, -320687.78222286271460, 312110.04133755429291,
        306706.99777237116391, -1199602.2626751819183, 1489876.7581807900958,
        -983301.03812460934208, 346445.22525468589947, -51524.795648340968513
    ]),
    (9, 3, &[
        -1.8067080527544021606, 30.413155585075869705, 153.62532423010894230,
        -4275.6818557748761872, 22280.234407631843178, -22294.360392132099974,
        -188892.07658652729984, 800265.57729686724177, -1211192.8548070343556,
        -77428.408184713489979, 3343683.8379703140094, -6075462.1554119391419,
        5742939.8025630234344, -3178262.5289756645302, 978732.98065558879521,
        -130276.59845140693203
    ]),
    (10, 3, &[
        2.0777142606675624847, -39.947360754013061523, -172.57638879468381540,
        6386.1869555628867376, -40128.233950133856041, 67957.947814703914434,
        297268.90885718166849, -1779345.5277624794845, 3703482.9515239098067,
        -1986101.2546910898185, -7335848.9571808003709, 20236466.148311260729,
        -26009069.048248407006, 20168378.697199375155, -9655403.7938215681211,
        2644939.5099481697170, -318773.08892039496616
    ]),
    (11, 3, &[
        -2.3610389325767755508, 51.215318048867833364, 182.72462206625770697,
        -9201.6026100350086393, 68268.256270370096570, -162141.74207057405274,
        -402709.29424480088095, 3603004.6646962551842, -9740822.7436915944519,
        10107345.074822039354, 11498843.003383757375, -56841651.345428293012,
        97219891.251414595951, -99519441.572391483730, 65942266.170395132237,
        -27893470.527717198286, 6888375.1431181415309, -758786.31484749532876
    ]),
    (12, 3, &[
        2.6561687991488724947, -64.344060508074698510, -179.63738093291836674,
        12860.884276726402663, -110864.10416322604021, 338921.66960863282529,
        430704.46372470858983, -6738355.6173354573243, 22959038.837731227338,
        -34599901.818598601926, -5491093.1482636375735, 136348100.13563343194,
        -311391327.48073317359, 406747852.87490380879, -350465400.65634558429,
        203621539.64411279745, -77285292.825523293342, 17387623.032021543609,
        -1764164.5657772609975
    ]),
    (13, 3, &[
        -2.9626498144352808595, 79.458041370067243966, 158.20533868869907341,
        -17512.092404496780068, 173186.23779115767550, -648825.90238130558651,
        -226118.57798798103100, 11744385.639221317992, -49655262.440949257658,
        97992370.806143206674, -45563229.252833811893, -276725901.55879139753,
        874903955.44068001049, -1431639430.0141678479, 1544324559.7308983592,
        -1156507831.0309397511, 599846625.33396072076, -206711172.70469868149,
        42729154.354849580701, -4019188.6691200667599
    ]),
    (0, 4, &[
        0.11215209960937500000, 0.0, -2.3640869140625000000, 0.0, 8.7891235351562500000, 0.0,
        -11.207002616222993827, 0.0, 4.6695844234262474280
    ]),
    (1, 4, &[
        -0.39253234863281250000, 0.46730041503906250000, 13.002478027343750000,
        -14.578535970052083333, -65.918426513671875000, 71.777842203776041667,
        106.46652485411844136, -113.93785993160043724, -53.700220869401845422,
        56.813277151686010374
    ]),
    (2, 4, &[
        0.88319778442382812500, -2.2430419921875000000, -40.888863372802734375,
        99.291650390625000000, 222.92270863850911458, -632.81689453125000000,
        -205.55324667471426505, 1232.7702877845293210, -339.12856875133121946,
        -728.45517005449459877, 393.21792165601858550
    ]),
    (3, 4, &[
        -1.6191959381103515625, 6.5174388885498046875, 97.292139053344726562,
        -384.72013047112358941, -422.46132278442382812, 2925.8162224946198640,
        -1437.2810672241964458, -5929.6163575631600839, 6678.9649706318545243,
        1992.7516382310725152, -5560.5995012212682653, 2034.9551693024277015
    ]),
    (4, 4, &[
        2.6311933994293212891, -14.813423156738281250, -194.76567316055297852,
        1116.2957621256510417, 214.74175742997063531, -9500.2007904052734375,
        12733.852428636433166, 15619.117721871584041, -43856.442195416477973,
        16041.189890575016477, 30538.376827393703173, -31457.433732481486840,
        8757.4502329231489542
    ]),
    (5, 4, &[
        -3.9467900991439819336, 28.973631262779235840, 345.96240515708923340,
        -2698.2640026051657540, 1749.1663194396760729, 24230.291604531833104,
        -57186.682706525590685, -12268.269917924904529, 179642.68522044022878,
        -184075.59647969633791, -55836.464134952713487, 219854.46366368396092,
        -146898.32628401899970, 33116.007471226346158
    ]),
    (6, 4, &[
        5.5912859737873077393, -51.149418354034423828, -562.32073248028755188,
        5740.3790382385253906, -8505.8885195685227712, -51098.161945523156060,
        189688.56368664133696, -98986.676113505422333, -524313.33320720157996,
        1006412.2572891519230, -338656.53584266578056, -879242.30314162838225,
        1184856.1356540792633, -599009.59593194338847, 113723.03789882673771
    ]),
    (7, 4, &[
        -7.5881738215684890747, 83.791322236259778341, 852.65149199664592743,
        -11106.114063047180100, 25906.550896742895797, 90628.038560826472504,
        -518627.00526554010007, 625235.13813439073187, 1093177.6471805288836,
        -3890056.2699064931220, 3443257.5304835279133, 1688397.8063561002636,
        -6072278.7538110165925, 5368522.3053911687123, -2206353.9977704553128,
        362368.26917284610367
    ]),
    (8, 4, &[
        9.9594781408086419106, -129.64064240455627441, -1221.6473410353064537,
        19961.318612462793078, -64135.377206358956439, -132491.34865988838862,
        1231383.3446542421759, -2354589.9435372119185, -1264272.3547066582332,
        11829877.236705665039, -17640228.849921599961, 3679036.5985685346058,
        21328290.463957701877, -31765842.068457922539, 21552604.862053478433,
        -7505720.5013225646891, 1087467.9477654193166
    ]),
    (9, 4, &[
        -12.725999846588820219, 191.72191139924424616, 1668.3300609576205413,
        -33822.376037367149478, 139670.53397437636223, 142413.44221576977052,
        -2615894.9488370680107, 7028008.7411020993735, -1692308.6869349767646,
        -29470781.812749969812, 66963160.307047821471, -48089009.180540108686,
        -47220345.652008289171, 138176622.72569342840, -141477318.49446414033,
        78991076.066288083382, -23950277.790642797164, 3106959.7999206284827
    ]),
    (10, 4, &[
        15.907499808236025274, -273.33609867841005325, -2184.4474298407246048,
        54603.014533953543693, -277734.45331034886641, -41109.662796960089573,
        5064705.8054347585059, -18090940.629099192262, 15917528.891696545807,
        60220437.637860917599, -208561974.26419501420, 250941409.40257928779,
        12084648.536915454989, -458976381.31741616556, 699975914.26074700776,
        -563757375.34166870146, 269426949.85344351478, -72497863.184361287773,
        8519623.3256649401434
    ]),
    (11, 4, &[
        -19.522840673744212836, 378.05442703043402114, 2752.8286152184838570,
        -84659.009316768248795, 515277.57789757005885, -327436.12858763123432,
        -9039645.4021864355266, 41795541.145581633576, -61523469.344794095368,
        -95072522.336003533273, 557312492.76991978150, -963898631.17215744429,
        480963077.05278739701, 1131925258.2353560419, -2762861092.1224474487,
        3066633312.6192085228, -2065683582.7903266052, 866733914.71761334168,
        -209952808.47963646972, 22561861.306890567863
    ]),
    (12, 4, &[
        23.590099147440923844, -509.71270865877158940, -3345.7051051560481552,
        126830.08496875773140, -904536.17796320887184, 1241459.9239568200231,
        14964746.535519588726, -88697323.877097900818, 182496348.04247934870,
        82548357.373675412652, -1305701152.6740455738, 3075905875.9322221769,
        -2915784132.1314453282, -1631935529.3260648957, 8923557290.4467172403,
        -13522339111.332256776, 12138202400.912393639, -7081644626.2422883477,
        2655510812.9195669082, -585530475.83660861349, 57986597.253985419492
    ]),
    (0, 5, &[
        0.22710800170898437500, 0.0, -7.3687943594796316964, 0.0, 42.534998745388454861, 0.0,
        -91.818241543240017361, 0.0, 84.636217674600734632, 0.0, -28.212072558200244877
    ]),
    (1, 5, &[
        -1.0219860076904296875, 1.1733913421630859375, 47.897163336617606027,
        -52.809692909604027158, -361.54748933580186632, 389.90415516606083623,
        964.09153620402018229, -1025.3036972328468605, -1057.9527209325091829,
        1114.3768660489096727, 409.07505209390355072, -427.88310046603704731
    ]),
    (2, 5, &[
        2.8104615211486816406, -6.8132400512695312500, -175.59265831538609096,
        412.65248413085937500, 1483.6983865298922100, -3828.1498870849609375,
        -3429.1824372044316045, 12120.007883707682292, 557.04779563126740632,
        -15403.791616777333703, 5099.3321148946942616, 6770.8974139680587706,
        -3602.9167662868229396
    ]),
    (3, 5, &[
        -6.0893332958221435547, 23.218954324722290039, 480.30594648633684431,
        -1808.5316684886387416, -3878.5356589824434311, 19896.567837257637549,
        -442.43697992960611979, -68889.990792852959025, 51994.291933598341765,
        82310.686911069807202, -107791.27622674358562, -11421.030640241631355,
        61775.622629784098705, -22242.802900370862046
    ]),
    (4, 5, &[
        11.417499929666519165, -60.543208122253417969, -1092.4312783437115805,
        5864.8337360927036830, 6502.6598836863797808, -73117.673620733634505,
        62464.986490075687042, 248344.19895160816334, -446788.55343178424816,
        -141685.28980603760980, 805685.00855625677338, -411181.55351158250234,
        -353321.84981767407842, 410732.51135669781511, -112357.72180097660343
    ]),
    (5, 5, &[
        -19.409749880433082581, 133.60695303976535797, 2184.1347855359315872,
        -15685.927751365060709, -3330.0494749048683378, 213065.39140775687165,
        -371035.73548135295431, -595658.10351999312306, 2217706.3121620208025,
        -928359.76150830112939, -3462387.4565158783367, 4492508.5831562094441,
        -105953.60990151918538, -3174045.4228780972346, 2222890.1148558130258,
        -492012.66653936007240
    ]),
    (6, 5, &[
        30.732103977352380753, -262.68730902671813965, -3966.7030987024307251,
        36616.605837684018271, -23288.020921949948583, -522073.19210540329968,
        1445873.6105443313563, 729826.91993359621660, -8027322.7404775209228,
        9022069.9722413070898, 8528377.7669713558429, -26111911.326974580072,
        15072848.600502055062, 11547035.062352154444, -20141460.694713124158,
        10381853.494410238157, -1934247.3992962518385
    ]),
    (7, 5, &[
        -46.098155966028571129, 474.28179555572569370, 6683.6986173737261977,
        -77185.928108340199369, 113831.12007369411134, 1111273.3131467255535,
        -4487654.8822124313622, 1363280.0193113290821, 22934079.022569534587,
        -45086888.891430235790, -1310272.8912292084566, 103829405.25391139096,
        -124354846.65650933807, 7129538.3762123397968, 107358912.41929520843,
        -104902766.60439072992, 43358616.238781106380, -6986431.7916780392488
    ]),
    (8, 5, &[
        66.266099201166070998, -801.85159036517143250, -10599.673972529735017,
        150238.26124378282197, -349014.85897753891605, -2089251.7495501184712,
        11932847.810754978267, -12233248.989355019522, -52996346.810335384350,
        167552806.49381000405, -104151238.67453537869, -295472139.38679802840,
        638921130.05027917750, -364575119.55069248400, -321938848.50186568760,
        670099675.87405621186, -477068925.07477830810, 165792634.22539301473,
        -23563863.859185525714
    ]),
    (9, 5, &[
        -92.036248890508431941, 1286.5459820115674202, 15984.246642014751810,
        -274251.94134559012498, 875242.48789234256927, 3479369.5294348938478,
        -28243123.382389417092, 48978753.833933594038, 96403146.255130900766,
        -511553591.82361285211, 629980523.20384634815, 530948403.41019250637,
        -2455930387.0192782105, 2650615136.5125114389, -13787083.107153494438,
        -2934135354.5042859293, 3427343175.1586684272, -1959752975.9949664819,
        590135160.40330437780, -75099321.778257988527
    ]),
    (10, 5, &[
        124.24893600218638312, -1977.9098049255553633, -23091.371137548782696,
        474842.97883978903678, -1940160.8026042800714, -5051698.1764753913085,
        60910728.961121054906, -150451158.23316204445, -115862597.99920025974,
        1340568362.9608932867, -2534626023.8559564861, 57223508.996001180928,
        7462542511.1368897210, -12803010436.906857334, 6529418551.9917203148,
        8333347633.6309463361, -17879701023.370781023, 15384544080.383156452,
        -7429525037.6309918827, 1979364564.1715841600, -228201703.20311712289
    ]),
    (11, 5, &[
        -163.78268836651841411, 2934.5753597465244149, 32133.674298098814287,
        -786448.50173515116761, 3940574.6676366506081, 6023482.0215492578926,
        -121576300.80985078356, 396478314.88388992406, -28867608.104982563453,
        -3079357130.2226958330, 8249384124.8426910359, -5275292901.0490022350,
        -17864885603.458945318, 48480263067.875486448, -46292296797.993831733,
        -6808810264.3074322272, 70205428541.430035549, -89866265315.798467190,
        62728346454.981427111, -26379975109.497266807, 6313975478.5070403854,
        -665761463.93251599995
    ]),
    (0, 6, &[
        0.57250142097473144531, 0.0, -26.491430486951555525, 0.0, 218.19051174421159048, 0.0,
        -699.57962737613254123, 0.0, 1059.9904525279998779, 0.0, -765.25246814118164230, 0.0,
        212.57013003921712286
    ]),
    (1, 6, &[
        -3.1487578153610229492, 3.5304254293441772461, 198.68572865213666643,
        -216.34668231010437012, -2072.8098615700101096, 2218.2702027328178365,
        8045.1657148255242242, -8511.5521330762792517, -14309.871109127998352,
        15016.531410813331604, 11861.413256188315456, -12371.581568282436550,
        -3719.9772756862996501, 3861.6906957124443986
    ]),
    (2, 6, &[
        10.233462899923324585, -24.045059680938720703, -830.55504153881754194,
        1907.3829950605119978, 9817.0755057463759468, -24000.956291863274953,
        -37145.398656393453558, 109134.42187067667643, 44836.131085879493643,
        -222597.99503087997437, 21083.102663859050460, 208148.67133440140671,
        -75945.993209761297570, -72698.984473412256018, 38306.908850817252349
    ]),
    (3, 6, &[
        -25.583657249808311462, 94.002347901463508606, 2561.4464542163269860,
        -9323.5958246609994343, -30925.007683879997995, 137806.75057795568307,
        66832.114908046586804, -695211.42408942898710, 297044.24306208789349,
        1456689.0310313083630, -1349408.4412036920976, -1160751.9107670259288,
        1778986.1326650806502, 2732.4118798791034334, -771855.42780552482418,
        274755.25810395356345
    ]),
    (4, 6, &[
        54.365271655842661858, -276.51818633079528809, -6505.3076391667127609,
        33393.909001989024026, 70377.367684318314469, -559956.42247611134141,
        214189.08434628603635, 2932546.1434609688359, -3873550.9334950489425,
        -5169809.5626455059758, 12515387.720161636405, -485287.10103841189331,
        -14696506.049911874334, 8973612.6112505443054, 4358025.7113579717181,
        -5899263.9630258568617, 1593568.9458830170786
    ]),
    (5, 6, &[
        -103.29401614610105753, 679.49573871586471796, 14406.592158034443855,
        -97833.485413427407644, -109874.73447139263153, 1806898.4781330669971,
        -2228617.5688649368428, -9039218.0698707036945, 22913970.357558080752,
        6014580.7747564135778, -67365551.082731008652, 49347945.008100392566,
        61291772.218955972273, -101851641.61990357673, 18812228.438435360796,
        48878028.306514326695, -36319210.680616361669, 7931540.8655372143613
    ]),
    (6, 6, &[
        180.76452825567685068, -1472.1516226977109909, -28789.438034501904622,
        248412.49281514968191, 57720.374439080618322, -4919773.7285477433167,
        10556839.574755387407, 20546468.524262875642, -95782021.413901062575,
        47859753.794019524423, 248947938.76422519634, -397302112.77505450021,
        -60373613.593196943601, 619895830.67946774788, -460542977.57691540068,
        -133881283.62288371220, 360816116.57296145253, -191228273.50596204944,
        35131056.264643928958
    ]),
    (7, 6, &[
        -296.97029642004054040, 2903.8678610353963450, 53085.574017544759304,
        -566162.21564224131681, 351303.05079310148650, 11717363.296337798053,
        -37248885.401731669600, -29556393.543845627395, 317963019.15514055453,
        -391675101.18705789558, -632571201.89067213266, 2001265322.6458411313,
        -1008064787.2696644192, -2363398838.2753953344, 3743079200.5912006268,
        -1091651847.4629542050, -1902208028.0358040356, 2133928476.4409109596,
        -893289789.98112876745, 141870657.61208999896
    ]),
    (8, 6, &[
        464.01608815631334437, -5325.3068480961956084, -91725.505981153156193,
        1185316.6466349283157, -1734253.4162956622921, -24965643.657687719930,
        109865301.06964371257, -7842536.5990090553082, -882004248.16533042144,
        1812569161.1229405097, 796190115.17482420785, -7547640676.2891254543,
        8606208381.3162846761, 4634326771.3840251843, -19504767652.151161478,
        15458811432.485826518, 3233232293.8508888375, -14292761227.388542723,
        10872211035.524945516, -3794154076.5815443275, 531367092.46942384383
    ]),
    (9, 6, &[
        -696.02413223447001656, 9211.7329484450783639, 150176.80785295595602,
        -2316795.9016969799608, 5353301.7267099139240, 48240128.320645392607,
        -285088568.66606943443, 236539658.57255855849, 2091063546.0424140229,
        -6478408107.9479218188, 2114947617.4171696310, 22484222108.370436724,
        -43504182331.312579142, 9073306866.7430378915, 72378013713.663446159,
        -104755002543.75143509, 35288894490.708636111, 58426452630.062379587,
        -83650899080.625595930, 49569134901.994243944, -14909719423.420583328,
        1869289195.4875346262
    ]),
    (10, 6, &[
        1009.2349917399815240, -15188.489623096204014, -234912.74468029359442,
        4278033.8338821994157, -13570280.995019535225, -85095459.392767211454,
        669951675.09023006543, -1041016026.5703218480, -4241350570.5261899700,
        19536358548.670235798, -19158789931.456781880, -52588961930.566950783,
        168223251386.27505861, -131543443714.17931735, -183278984759.32788630,
        500731039137.68584765, -395175402811.80868032, -83866621459.668331313,
        443918936157.05017610, -420471377306.84165961, 207052924562.97132855,
        -54907932888.507130529, 6236056730.2635893277
    ]),
    (0, 7, &[
        1.7277275025844573975, 0.0, -108.09091978839465550, 0.0, 1200.9029132163524628, 0.0,
        -5305.6469786134031084, 0.0, 11655.393336864533248, 0.0, -13586.550006434137439, 0.0,
        8061.7221817373093845, 0.0, -1919.4576623184069963
    ]),
    (1, 7, &[
        -11.230228766798973083, 12.382047101855278015, 918.77281820135457175,
        -990.83343139361767542, -12609.480588771700859, 13410.082530915935834,
        66320.587232667538855, -69857.685218409807594, -169003.20338453573209,
        176773.46560911208759, 224178.07510616326774, -233235.77511045269270,
        -149141.86036214022361, 154516.34181663176320, 39348.882077527343424,
        -40628.520519072948089
    ]),
    (2, 7, &[
        42.113357875496149063, -96.752740144729614258, -4309.3875268953187125,
        9728.1827809555189950, 67131.493914289162272, -158519.18454455852509,
        -361549.21741861661275, 965627.75010763936573, 791368.90269480066167,
        -2797294.4008474879795, -473067.29978352049251, 4157484.3019688460562,
        -742925.21875958646140, -3063454.4290601775661, 1186992.6183777028865,
        886789.43999110403230, -463948.91246287829107
    ]),
    (3, 7, &[
        -119.32118064723908901, 426.72709654457867146, 14774.672950860112906,
        -52455.440737222809167, -242280.57068559899926, 994102.67395229967167,
        1032233.4449197463691, -6741567.1085603777512, 646495.83215296654790,
        20680668.518424851831, -13425393.794712164658, -29950004.715897617246,
        32133326.488920312047, 16877471.905929211282, -30879035.210339582752,
        1961435.1350279426026, 10741165.112229910651, -3791244.3495002070744
    ]),
    (4, 7, &[
        283.38780403719283640, -1397.7315495908260345, -41380.460209263255820,
        205570.88069305533455, 656958.69278146053058, -4406726.3053560412498,
        -460386.15389300137896, 31745963.553354091997, -30185144.899501059008,
        -92885893.761842946947, 159671874.67639934532, 89037317.391947147287,
        -324112057.62064508289, 75417289.288447113978, 275169534.60077554540,
        -191141129.57979682342, -56632059.761422146328, 92789782.492575658213,
        -24828398.690560814574
    ]),
    (5, 7, &[
        -595.11438847810495645, 3784.5764889410929754, 100370.50080364884343,
        -654419.09384311857985, -1371381.6192330607878, 15498343.812751787009,
        -11665144.592299357907, -112601561.49426607138, 219262318.25667364074,
        254104121.37964987144, -1006396481.7103226659, 253036623.98729691889,
        1831393810.4978639927, -1774529065.4266491466, -1003472637.9292914864,
        2290280875.9786741918, -651246794.10887221841, -803784902.98109705890,
        640483342.29369123263, -138440607.21363135318
    ]),
    (6, 7, &[
        1140.6359112497011665, -8957.2682584379799664, -218407.33629125532461,
        1794837.6930232931017, 2046161.0563529025012, -45986041.828079905965,
        74544641.814482732603, 314850611.45725349592, -1044136171.4521382041,
        -187106978.33355739111, 4438953626.0956817754, -4408582954.0483059788,
        -6264272163.4397192983, 14149702487.577580987, -2713149740.6519136094,
        -14233558941.890554329, 12753481214.719287040, 934842459.40433410209,
        -6845048171.9341116529, 3754053882.0127951637, -682202534.28377278514
    ]),
    (7, 7, &[
        -2036.8498415173235117, 19163.284363303755526, 436370.36938456366105,
        -4395730.5804739226086, -1112960.9840974107984, 119491789.40923461317,
        -304912988.84344882540, -691963837.01336538937, 3885386169.7360802683,
        -2313847981.3260245039, -14816925759.772210986, 28337891715.905708458,
        7872387353.1924133326, -72435569735.091307437, 59410896148.189366465,
        46141874867.831978016, -105411711029.14681739, 45764643115.283153298,
        33619493138.706044340, -45524891856.627263052, 19398990085.810093364,
        -3046176001.4829695650
    ]),
    (8, 7, &[
        3437.1841075604834259, -37884.316448339552153, -813572.82790964112831,
        9844700.1196742646463, -5932665.5737596173789, -278602941.80981757775,
        999702331.75599910068, 1082145758.5676864833, -12097872233.934345656,
        16269568192.896168430, 37442906272.629884505, -127678482632.39934914,
        56533169829.379619075, 263705962704.22363017, -430880513772.40015440,
        28685028305.645455607, 544657720548.16430202, -543385080747.85240194,
        33319140131.863860742, 311025095335.01861076, -257492440682.78870598,
        90635479554.844098597, -12545989968.390205031
    ]),
    (9, 7, &[
        -5537.6855066252232973, 70275.288364441469184, 1432194.8403133915934,
        -20502591.084346145880, 29691158.739889488095, 592508323.24904278254,
        -2831998971.7799303680, -487772628.07968000257, 32638786024.059947790,
        -70496897875.469508762, -62531875035.153643030, 456706039700.77564846,
        -503779673552.18388727, -650638245764.84731771, 2119375307389.9958522,
        -1373635599107.5234068, -1758554601545.7817139, 3640007756944.3988399,
        -1912987782878.0613666, -1044942776057.9478291, 2082243082925.6114167,
        -1292209352199.4454475, 389815335189.77376153, -48292926381.689492854
    ]),
    (0, 8, &[
        6.0740420012734830379, 0.0, -493.91530477308801242, 0.0, 7109.5143024893637214, 0.0,
        -41192.654968897551298, 0.0, 122200.46498301745979, 0.0, -203400.17728041553428, 0.0,
        192547.00123253153236, 0.0, -96980.598388637513489, 0.0, 20204.291330966148643
    ]),
    (1, 8, &[
        -45.555315009551122785, 49.604676343733444810, 4692.1953953443361180,
        -5021.4722651930614596, -81759.414478627682797, 86499.090680287258611,
        556100.84208011694252, -583562.61205938197672, -1894107.2072367706267,
        1975574.1838921155999, 3559503.1024072718499, -3695103.2205942155394,
        -3754666.5240343648810, 3883031.1915227192359, 2085082.8653557065400,
        -2149736.5976147982157, -474800.84627770449312, 488270.37383168192555
    ]),
    (2, 8, &[
        193.61008879059227183, -437.33102409169077873, -24389.798720089893322,
        54330.683525039681367, 481258.52318321001006, -1109084.2311883407405,
        -3433050.7548587226633, 8650457.5434684857726, 11004225.300068311602,
        -33238526.475380749062, -15303078.309507955098, 69562860.629902112723,
        1830924.9239440239572, -80869740.517663243591, 18943271.994495349280,
        49072182.784650581825, -19806771.899029389669, -12122574.798579689186,
        6307948.1226220563244
    ]),
    (3, 8, &[
        -613.09861450354219414, 2147.8571771753195208, 91956.399098661058815,
        -320284.80771632295052, -1938565.2131506522862, 7533108.6348155997448,
        12364512.209251265036, -65358277.938386196419, -16530840.331176116137,
        269292234.00676317160, -105780946.98529899276, -575008738.51905591292,
        462747211.13824444405, 619754381.87898314676, -755460241.94008607635,
        -252322946.06096464110, 569416784.91969405599, -61357261.820865861243,
        -164974352.55837953060, 57850732.229668052938
    ]),
    (4, 8, &[
        1609.3838630717982596, -7751.9961041252827272, -281313.57426896920515,
        1362914.7891508336068, 5966457.1081110733990, -36097318.956064416329,
        -22309783.293551422257, 336158425.14225148967, -205028522.03506721003,
        -1388339192.4100137759, 1836112835.6997822732, 2556726458.1368042032,
        -5652778880.4580993178, -1072688790.0156425156, 8223828086.6764744334,
        -2962125430.6175380614, -5363095697.4586512056, 4151384158.2283357977,
        758617226.29066830002, -1589602926.9007581937, 422197436.26031767718
    ]),
    (5, 8, &[
        -3701.5828850651359971, 22929.423816498228916, 740942.45462626213339,
        -4683368.4794967535629, -14688082.295896812171, 136985890.98054216279,
        -37063877.251336542111, -1319571104.7402945920, 2005453574.1427636671,
        4917316117.1324589056, -13428166320.891447862, -3828355991.3598264145,
        37778220592.815991623, -20635506272.066951931, -47082248514.737817855,
        56649997707.122923550, 14169411429.388481941, -52510965464.207838905,
        18673363121.781645026, 14082226269.939926879, -12159500780.523353877,
        2607014902.9539700770
    ]),
    (6, 8, &[
        7711.6310105523666607, -58858.321154496479721, -1741907.2159207465870,
        13794087.929804007718, 28916480.065464689455, -437983696.24595980730,
        494945307.55363422412, 4180226129.2961517207, -10954467146.581302332,
        -11060935369.012122216, 67274495072.654389414, -33385597946.547532147,
        -168738543918.69430001, 236353638119.12099768, 123426482948.35286349,
        -460569493399.15116382, 183685386812.60549147, 323426896220.20397235,
        -345059927788.03296106, 18066712637.598243570, 137638821647.93765226,
        -78528723144.419087956, 14147149999.271829167
    ]),
    (7, 8, &[
        -14872.431234636707131, 135739.23591067179473, 3743563.4066693378186,
        -36117123.586437547311, -41857416.064054280688, 1225475415.8400151136,
        -2467842162.9074118554, -10944143126.183310329, 45219896350.687109257,
        3706147531.3941538260, -259638349679.49799671, 331511238218.36097150,
        503674442974.85219625, -1481164218255.8010841, 369277357070.34485189,
        2339646237464.7011180, -2569885298111.3265694, -667794049596.58740652,
        2906153064933.9250617, -1575977334606.5289263, -578377418663.53101806,
        1021516684285.5146634, -444821917816.52114438, 69214137882.703873029
    ]),
    (8, 8, &[
        26956.281612779031676, -287752.74431752909550, -7479028.3293311244821,
        86134990.009811768863, 23679004.644932133834, -3077161905.3885988089,
        9103660424.3905427045, 23518972784.280263949, -154703115855.86457830,
        108277078595.12757644, 805587125662.51652400, -1805165807562.2091925,
        -672890155245.49490410, 6669143665397.1378050, -6132703262892.6427237,
        -7384886877294.0818151, 17989877009001.983669, -6680625953666.2171081,
        -14315112877022.322823, 17853687377733.207721, -3800827233430.3173356,
        -6918410846679.1440993, 6365772360949.3812603, -2267586042740.4274751,
        310920009576.22258316
    ]),
    (0, 9, &[
        24.380529699556063861, 0.0, -2499.8304818112096241, 0.0, 45218.768981362726273, 0.0,
        -331645.17248456357783, 0.0, 1268365.2733216247816, 0.0, -2813563.2265865341107, 0.0,
        3763271.2976564039964, 0.0, -2998015.9185381067501, 0.0, 1311763.6146629772007, 0.0,
        -242919.18790055133346
    ]),
    (1, 9, &[
        -207.23450244622654282, 223.48818891259725206, 26248.220059017701053,
        -27914.773713558507469, -565234.61226703407842, 595380.45825460922926,
        4808855.0010261718786, -5029951.7826825475971, -20928027.009806808897,
        21773603.858687892085, 52050919.691850881048, -53926628.509575237122,
        -77147061.601956281926, 79655909.133727217924, 67455358.167107401877,
        -69454035.446132806377, -32138208.559242941417, 33012717.635684926217,
        6437358.4793646103367, -6599304.6046316445590
    ]),
    (2, 9, &[
        984.36388661957607837, -2194.2476729600457475, -149715.34984220301505,
        329977.62359907967038, 3636074.9553359345392, -8229815.9546080161817,
        -32850375.705398849013, 79594841.396295258680, 140766384.09976010426,
        -388119773.63641718318, -302391232.58882834949, 1069154026.1028829621,
        267438889.51147761435, -1738631339.5172586463, 117013574.77418801057,
        1654904787.0330349261, -452792004.09905362650, -852646349.53093518044,
        354479824.94387953335, 183646906.05281680809, -95153470.227211795243
    ]),
    (3, 9, &[
        -3445.2736031685162743, 11875.044917870854988, 615370.50617503436198,
        -2111012.2880743031723, -16085470.193130487741, 60142798.465327082670,
        138071565.42237886418, -645362876.57211229968, -403042168.77936625406,
        3392353592.8461412643, -459521271.54126358493, -9731832243.4128846845,
        5664098916.1399176504, 15628587453.068137370, -14586127233.110452133,
        -13112286301.064475188, 18076138583.500999115, 3815036344.9012045022,
        -11188129037.135692765, 1563031125.3210441483, 2774182673.1720275815,
        -967769239.01720317824
    ]),
    (4, 9, &[
        9905.1616091094842886, -46820.775577189124306, -2040487.1579820312439,
        9691735.5725892393225, 54815060.692073363805, -309390686.57090219229,
        -360017948.08027628199, 3579817310.0615042649, -975311608.49901937973,
        -19324823653.635730322, 19615966368.548239543, 52313543472.729543241,
        -87319509031.594965641, -62880701946.001201560, 187577712375.82047424,
        -5014883987.8038807144, -210187382319.75343210, 95721572764.807326435,
        109424352395.85297165, -93578868051.240421500, -10054064393.166929203,
        29497575770.435656525, -7788016225.4016704591
    ]),
    (5, 9, &[
        -24762.904022773710722, 150202.12250011534820, 5795836.3854749992775,
        -35748503.915727151813, -151894819.53780369009, 1257834576.5897312294,
        283767191.88351472079, -15254386392.322461649, 17551211231.567450237,
        79224659176.160664514, -169127446206.19948897, -159965663833.05011647,
        667618088176.46828695, -96638419442.062469711, -1307530021252.0141810,
        998989571129.40670193, 1171444346499.5230642, -1737201461305.1621935,
        -114746520425.41058268, 1243665816084.6793073, -512525557301.93515073,
        -261796114655.33666678, 247688439610.96543843, -52756420815.901269809
    ]),
    (6, 9, &[
        55716.534051240849124, -415613.72155461745024, -14629090.289521179515,
        112517365.15692088569, 349569807.61470724572, -4300749690.4008170962,
        2780201489.2284702260, 53008111096.391616511, -112833892526.88952297,
        -236800084652.33408957, 948058960807.18952080, 15893204800.580178374,
        -3467524908336.7843972, 3164309467171.3659456, 5582435675279.1817146,
        -10541249137249.730392, -1168774181536.2029753, 14413943369875.125772,
        -7960463497916.1060492, -7323822211977.2888688, 9405979314966.6882022,
        -1275663773372.9196006, -2930439830152.3544240, 1747630840980.1348510,
        -312613977240.16973767
    ]),
    (7, 9, &[
        -115412.82053471318747, 1027788.8260207103833, 33623754.973679064933,
        -313584768.22511895708, -659891574.79280520771, 12850764070.127691360,
        -19440345035.583477731, -155138555406.99154257, 516911193990.92260102,
        451041007491.51124256, -4074544650661.9635765, 3101195098601.7687528,
        13186035652463.635190, -24971415775329.260965, -10847664957177.134063,
        66205224018265.472705, -37500185472771.584184, -69777795804669.385671,
        99311193873506.569397, -492168373279.20159968, -80134019127845.984412,
        51160427044311.739411, 9045641917569.2467301, -24123027505367.165512,
        10768904399045.846700, -1663085461560.5466581
    ]),
    (0, 10, &[
        110.01714026924673817, 0.0, -13886.089753717040532, 0.0, 308186.40461266239848, 0.0,
        -2785618.1280864546890, 0.0, 13288767.166421818329, 0.0, -37567176.660763351308, 0.0,
        66344512.274729026665, 0.0, -74105148.211532657748, 0.0, 50952602.492664642206, 0.0,
        -19706819.118432226927, 0.0, 3284469.8530720378211
    ]),
    (1, 10, &[
        -1045.1628325578440126, 1118.5075927373418381, 159690.03216774596612,
        -168947.42533689065981, -4160516.4622709423795, 4365974.0653460506451,
        43177080.985340047679, -45034159.737397684138, -232553425.41238182077,
        241412603.52332969965, 732559944.88488535051, -757604729.32539425138,
        -1426407013.9066740733, 1470636688.7564934244, 1741470982.9710174571,
        -1790874415.1120392289, -1299291363.5629483763, 1333259765.2247248044,
        541937525.75688624049, -555075405.16917439177, -96891860.665625115724,
        99081507.234339807604
    ]),
    (2, 10, &[
        5487.1048709286810663, -12101.885429617141199, -991438.75239470139087,
        2166230.0015798583230, 28994419.876786743130, -64719144.968659103681,
        -321629835.31147623339, 757688130.83951567540, 1749409837.5100643555,
        -4544758370.9162618687, -5113992851.9544763313, 15778214197.520607549,
        7774473545.9444870052, -33570323211.012887492, -3804246527.4759322626,
        44463088926.919594649, -5920634247.3331925357, -35768726949.850578829,
        10834752690.813605970, 16001937124.166968265, -6803368741.9070923418,
        -3054556963.3569951737, 1577229794.0273014954
    ]),
    (3, 10, &[
        -21033.902005226610754, 71551.022388357981754, 4410889.4214898588524,
        -14945521.653227529678, -139310283.22771754330, 506112018.78208167499,
        1519598088.8133635683, -6552067582.0564506220, -6692370095.4282068536,
        42444451633.414257582, 5560288488.7766793217, -155035909620.11651130,
        57543525805.054081844, 335136386281.40047184, -242028870673.91835183,
        -425158049601.57076545, 447281929473.23048294, 285539009675.26705395,
        -446532174700.75534828, -56114815650.416797381, 234199738711.39910784,
        -38367666879.807869654, -50717346515.577689017, 17618025541.849480837
    ]),
    (4, 10, &[
        65730.943766333158607, -305976.00327882005331, -15752484.913133094466,
        73626048.766219891723, 517727813.38636845015, -2779778621.0311819654,
        -4848484539.3006943808, 38867748248.486701209, 2816113040.3833130041,
        -261989764937.19714608, 193832179511.35043238, 941830771354.52418439,
        -1252062600825.4805385, -1788586580037.9230755, 3715406759129.6400037,
        1338049108553.0784173, -6078517409833.2670243, 1046877894952.0462047,
        5489626110236.1661278, -2928719118680.3861544, -2340856193318.6421567,
        2206204676067.3123808, 119173943641.45927347, -589883942966.21075926,
        154983207892.81174977
    ]),
    (5, 10, &[
        -177473.54816909952824, 1058104.4704696212045, 47977824.897952560186,
        -290115715.66147843083, -1577194622.2444813090, 12040320836.774941282,
        8938496432.7761692719, -177729149538.54760085, 142764258530.36399735,
        1190892990607.9998843, -2059313111949.9121859, -3727699663610.1911429,
        10889256225145.522967, 3246312869985.9515053, -29702334678008.056483,
        12354361209407.777556, 43335047349400.917011, -41504037524268.002306,
        -28336804589555.309295, 52945932725332.519399, -2984104941157.1313565,
        -30618403352283.411013, 14099792752244.009722, 5138575314225.4923364,
        -5394419195595.0379138, 1142750145697.5795143
    ]),
    (6, 10, &[
        428894.40807532385991, -3139491.0587579525708, -129346362.91769878378,
        971658116.23636815026, 4056885717.6650654269, -43776518263.068506188,
        6886509445.7336568338, 666192636622.63242699, -1146605162893.2335873,
        -4150515189210.3819757, 12899393468582.902633, 7742402532790.6606612,
        -63390570866544.420475, 31574846906545.697293, 155509830706127.21122,
        -197328514020298.70121, -161495194791368.91656, 431593958485279.11169,
        -57955664355845.420187, -444813800230214.83356, 304547176185415.82363,
        164529366533754.02760, -262168848376474.26253, 51430539333046.601717,
        65933562346693.241986, -41287526582645.050139, 7341963962580.3111652
    ]),
    (0, 11, &[
        551.33589612202058561, 0.0, -84005.433603024085289, 0.0, 2243768.1779224494292, 0.0,
        -24474062.725738728468, 0.0, 142062907.79753309519, 0.0, -495889784.27503030925, 0.0,
        1106842816.8230144683, 0.0, -1621080552.1083370752, 0.0, 1553596899.5705800562, 0.0,
        -939462359.68157840255, 0.0, 325573074.18576574902, 0.0, -49329253.664509961973
    ]),
    (1, 11, &[
        -5789.0269092812161489, 6156.5841733625632060, 1050067.9200378010661,
        -1106071.5424398171230, -32534638.579875516724, 34030484.031823816343,
        403822034.97468901972, -420138076.79184817203, -2628163794.2543622609,
        2722872399.4527176577, 10165740577.638121340, -10496333767.154808213,
        -24903963378.517825536, 25641858589.733168515, 39716473526.654258344,
        -40797193894.726483060, -41170317838.620371488, 42206049105.000758192,
        26774677250.924984473, -27400985490.712703408, -9929978762.6658553451,
        10147027478.789699178, 1603200744.0965737641, -1636086913.2062470721
    ]),
    (2, 11, &[
        33286.904728366992856, -72776.338288106717300, -7048423.0820374073034,
        15288988.915750383523, 243935418.08573977628, -538504362.70138786302,
        -3246894911.6396827767, 7489063194.0760509112, 21666937100.705365161,
        -53983904963.062576171, -80910564664.877465851, 229101080335.06400288,
        172760876423.44066571, -610977234886.30398648, -187937135374.72033958,
        1053702358870.4190989, 18639458829.443774842, -1174519256075.3585225,
        213630362751.48244186, 817332252922.97321022, -266086886489.81593243,
        -322968489592.27962303, 139744842706.19027127, 55347422611.580177333,
        -28497920919.101275948
    ]),
    (3, 11, &[
        -138695.43636819580357, 466698.94436858890046, 33739004.101605793511,
        -113151831.10727233791, -1262494179.8855194512, 4485679097.1221702841,
        16876412838.414698204, -68734331237.685231727, -99319007190.867271605,
        535143925100.64569760, 219559829042.68087919, -2402169771537.2297740,
        385225420494.61274582, 6605716163805.3629860, -3536807746028.4626688,
        -11320974870399.200872, 9487604757721.1762395, 11727696199159.893852,
        -13727281916428.067929, -6409955842808.2983124, 11468445778721.253331,
        723160235150.79794197, -5214971540434.5399686, 952560905703.62661138,
        1001898723474.6755508, -346817425242.52751961
    ]),
    (4, 11, &[
        468097.09774266083704, -2151404.5559841446618, -129076990.59865050915,
        595316208.51428773472, 5064273602.5906671292, -26185510869.073114681,
        -61837037264.905576505, 433386998010.23271090, 186443883288.37312122,
        -3537220973754.0018335, 1681730347233.8501195, 15988837394678.875714,
        -16993822946683.547492, -41340811227869.288548, 67591520066179.679649,
        56621717984129.588648, -149792388677379.47570, -20183328379251.847125,
        196651762467137.74506, -54964390301576.370525, -147653284026647.88789,
        88925712863728.440410, 52472318964377.745533, -54571161032830.893735,
        -776744894101.81078918, 12653076888080.966521, -3310861678129.4432166
    ]),
    (5, 11, &[
        -1357481.5834537164274, 7977851.1535147665703, 419517728.92817665197,
        -2495517054.7161424403, -16720780562.050493234, 120296564778.19436333,
        154404724838.89607546, -2110123804399.9206379, 974123695127.88869692,
        17443881430511.946630, -24448434409173.656268, -73513952038406.365892,
        169708094306922.00526, 139392884698962.95542, -607701552209729.47437,
        42904363912061.406899, 1241046770899817.3524, -768125556097572.10187,
        -1403171934960438.0242, 1622188475923667.7103, 657623934547413.88722,
        -1631882122398223.2875, 237083343503533.13124, 785835171244720.50574,
        -396417689594574.31797, -105868095076065.58561, 125179414423474.77661,
        -26396909127729.654202
    ]),
    (0, 12, &[
        3038.0905109223842686, 0.0, -549842.32757228868713, 0.0, 17395107.553978164538, 0.0,
        -225105661.88941527780, 0.0, 1559279864.8792575133, 0.0, -6563293792.6192843320, 0.0,
        17954213731.155600080, 0.0, -33026599749.800723140, 0.0, 41280185579.753973955, 0.0,
        -34632043388.158777923, 0.0, 18688207509.295824922, 0.0, -5866481492.0518472276, 0.0,
        814789096.11831211495
    ]),
    (1, 12, &[
        -34938.040875607419089, 36963.434549555675268, 7422871.4222258972763,
        -7789432.9739407564011, -269624167.08666155034, 281220905.45598032670,
        3939349083.0647673616, -4089419524.3243775468, -30405957365.145521510,
        31445477275.065026519, 141110816541.31461314, -145486345736.39413603,
        -421924022682.15660188, 433893498502.92700194, 842178293619.91844007,
        -864196026786.45225550, -1135205103443.2342838, 1162725227163.0702664,
        1021645279950.6839487, -1044733308876.1231340, -588678536542.81848505,
        601137341549.01570167, 196527129983.73688212, -200438117645.10478028,
        -28925012912.200080081, 29468205642.945621491
    ]),
    (2, 12, &[
        218362.75547254636931, -473942.11970389194590, -53559985.272697166145,
        115466888.79018062430, 2162702487.2919505639, -4731469254.6820607544,
        -33930459549.835830283, 76986136366.180025009, 271095146839.75321729,
        -654897543249.28815561, -1244130265844.5028996, 3321026659065.3578720,
        3434492363731.4649585, -10772528238693.360048, -5553407245149.3813559,
        23184673024360.107644, 4148109873524.0835034, -33519510690760.226852,
        1766187462911.1875877, 32207800350987.663468, -7064569616534.6127663,
        -19734747129816.391118, 6780185269401.9041713, 6981112975541.6982009,
        -3063627371132.2565100, -1085299076029.5917371, 557485489473.28346831
    ]),
    (3, 12, &[
        -982632.39962645866188, 3276416.0527937831379, 274430595.86767397376,
        -912438377.61048048104, -11979589299.502912885, 41816043571.570359444,
        191330729548.58232223, -746943185635.96708583, -1416198224023.6464721,
        6856956393274.5884258, 4829515891796.9969935, -36877687475484.603376,
        -2050957082915.0942624, 124378250253033.78820, -44312193894090.533579,
        -271207689501172.62955, 179586202876957.77361, 381618869449173.21877,
        -359490061117882.96881, -330393612742248.46582, 427952236370799.92495,
        148052565489017.04595, -307266140839707.15754, -4687264091266.0864760,
        123260326898726.61625, -24376238900981.871642, -21272360948501.370513,
        7341892911307.8818418
    ]),
    (4, 12, &[
        3562042.4486459126493, -16196313.687936474068, -1119546446.8249808309,
        5105896697.6570577310, 51476060928.630380287, -258447407741.23544355,
        -779649080899.64056288, 4982179421789.6942804, 4004696303571.8542110,
        -48152095258426.146318, 10206156605278.263985, 264344253278752.35082,
        -218798857956960.84499, -868622560677829.56823, 1161601525559524.2658,
        1687979001191903.2190, -3349241418127553.8805, -1649878672532120.5740,
        5897451215285124.6365, -125952827188585.92633, -6433283969334751.7469,
        2343935079955608.5977, 4106725553395393.7642, -2735980005540132.5807,
        -1230142327980830.8915, 1417490532431040.0017, -23384761374805.900562,
        -289892454526107.40352, 75592403781851.468191
    ]),
    (0, 13, &[
        18257.755474293174691, 0.0, -3871833.4425726126206, 0.0, 143157876.71888898129, 0.0,
        -2167164983.2237950935, 0.0, 17634730606.834969383, 0.0, -87867072178.023265677, 0.0,
        287900649906.15058872, 0.0, -645364869245.37650328, 0.0, 1008158106865.3820948, 0.0,
        -1098375156081.2233068, 0.0, 819218669548.57732864, 0.0, -399096175224.46649796, 0.0,
        114498237732.02580995, 0.0, -14679261247.695616661
    ]),
    (1, 13, &[
        -228221.94342866468364, 240393.78041152680010, 56141584.917302882999,
        -58722807.212351291413, -2362104965.8616681913, 2457543550.3409275122,
        40092552189.640209230, -41537328845.122739292, -361511977440.11687235,
        373268464511.34018528, 1977009124005.5234777, -2035587172124.2056548,
        -7053565922700.6894237, 7245499689304.7898162, 17102169035002.477337,
        -17532412281166.061672, -28732506045663.389701, 29404611450240.311097,
        33500442260477.310858, -34232692364531.459729, -26624606760328.763181,
        27170752540027.814733, 13768818045244.094179, -14034882162060.405178,
        -4179185677218.9420633, 4255517835706.9592699, 565151558036.28124143,
        -574937732201.41165254
    ]),
    (2, 13, &[
        1540498.1181434866146, -3322911.4963213577938, -433313348.25129661430,
        929240026.21742702895, 20173953055.394385937, -43806310275.980028275,
        -367752562201.24170098, 823522693625.04213554, 3453452850623.2709660,
        -8147245540357.7558550, -18967395863304.498472, 48502623842268.842654,
        64652876623215.013090, -187135422438997.88267, -137928375585894.45832,
        487895841149504.63648, 171009666849543.97695, -877097552972882.42245,
        -74254863627598.106482, 1089588154832573.5204, -116085557257555.85969,
        -919163347233503.76274, 228872931917376.68922, 502861180782827.78742,
        -180138187046491.99093, -160984522251228.28879, 71472589051967.572740,
        22899647546405.161991, -11739127546959.248774
    ]),
    (3, 13, &[
        -7445740.9043601853037, 24634048.351746637287, 2366020806.0262900637,
        -7808648260.6425043412, -118977141825.00262846, 409347654830.37623610,
        2227886871742.0341399, -8418196051278.7614582, -19993114336865.499162,
        89749606285710.604304, 91027650219177.795567, -567320456048460.00800,
        -158541319151866.40491, 2286994298876364.5224, -406108119093234.18714,
        -6109006264284954.9274, 3061509093597577.3617, 10949569443954370.550,
        -8409227264715248.2782, -12972671111828071.122, 13506857028733485.383,
        9542099548494263.3202, -13665198589678693.875, -3500771616752033.2515,
        8599505926079281.8598, -192584364085979.71888, -3085105840164255.6689,
        648294322883069.58159, 483163296698761.31750, -166336791576720.83219
    ]),
    (0, 14, &[
        118838.42625678325312, 0.0, -29188388.122220813403, 0.0, 1247009293.5127103248, 0.0,
        -21822927757.529223729, 0.0, 205914503232.41001569, 0.0, -1196552880196.1815990, 0.0,
        4612725780849.1319668, 0.0, -12320491305598.287160, 0.0, 23348364044581.840938, 0.0,
        -31667088584785.158403, 0.0, 30565125519935.320612, 0.0, -20516899410934.437391, 0.0,
        9109341185239.8989559, 0.0, -2406297900028.5039611, 0.0, 286464035717.67904299
    ]),
    (1, 14, &[
        -1604318.7544665739172, 1683544.3719710960859, 452420015.89442260775,
        -471878941.30923648336, -21822662636.472430684, 22654002165.480904234,
        425547091271.81986272, -440095709776.83934521, -4427161819496.8153373,
        4564438154985.0886811, 28118992684610.267576, -28916694604741.055309,
        -117624507411652.86515, 120699657932218.95313, 338813510903952.89689,
        -347027171774351.75500, -688776739315164.30766, 704342315344885.53495,
        997513290420732.48968, -1018624682810589.2619, -1023931704917833.2405,
        1044308455264456.7876, 728349929088172.52737, -742027862028795.48563,
        -341600294446496.21085, 347673188569989.47682, 95048767051125.906463,
        -96652965651144.909104, -11888257482283.680284, 12079233506095.466313
    ]),
    (2, 14, &[
        11631310.969882660899, -24956069.513924483156, -3719130469.3827566264,
        7939241569.2440612457, 197650420583.57805736, -426477178381.34693109,
        -4137136219101.0505865, 9165629658162.2739663, 44999979919399.924736,
        -104192738635599.46794, -290053332678279.44824, 717931728117708.95938,
        1184950942733150.9332, -3238133498156090.6407, -3148099361614567.8423,
        10004238940145809.174, 5326672157182975.4416, -21713978561461112.072,
        -4997511985428331.4237, 33440445545533127.273, 429328409587666.98618,
        -36372499368723031.528, 5419838346824587.4483, 27328510015364670.604,
        -7462027883028047.7909, -13500043636525530.253, 5000259547410615.2462,
        3946328556046746.4962, -1769166076587921.0596, -517354048506128.35163,
        264752449010576.61885
    ]),
    (0, 15, &[
        832859.30401628929898, 0.0, -234557963.52225152478, 0.0, 11465754899.448237157, 0.0,
        -229619372968.24646817, 0.0, 2485000928034.0853236, 0.0, -16634824724892.480519, 0.0,
        74373122908679.144941, 0.0, -232604831188939.92523, 0.0, 523054882578444.65558, 0.0,
        -857461032982895.05140, 0.0, 1026955196082762.4888, 0.0, -889496939881026.44181, 0.0,
        542739664987659.72270, 0.0, -221349638702525.19597, 0.0, 54177510755106.049005, 0.0,
        -6019723417234.0054450
    ]),
    (1, 15, &[
        -12076459.908236194835, 12631699.444247054368, 3870206398.1171501588,
        -4026578373.7986511753, -212116465639.79238740, 219760302239.42454551,
        4707197145849.0525974, -4860276727827.8835762, -55912520880766.919782,
        57569188166122.976664, 407553205759865.77271, -418643088909794.09305,
        -1970887757079997.3409, 2020469839019116.7709, 6629237688884787.8691,
        -6784307576344081.1526, -15953173918642561.995, 16301877173694858.432,
        27867483571944089.170, -28439124260599352.538, -35429954264855305.864,
        36114591062243814.190, 32466638305657465.126, -33059636265578149.421,
        -20895477102024899.324, 21257303545350005.806, 8964660367452270.4366,
        -9112226793253953.9006, -2302544207092007.0827, 2338662547595411.1154,
        267877692066913.24230, -271890841011735.91260
    ]),
    (0, 16, &[
        6252951.4934347970025, 0.0, -2001646928.1917763315, 0.0, 110997405139.17901279, 0.0,
        -2521558474912.8546213, 0.0, 31007436472896.461417, 0.0, -236652530451649.25168, 0.0,
        1212675804250347.4165, 0.0, -4379325838364015.4378, 0.0, 11486706978449752.110, 0.0,
        -22268225133911142.562, 0.0, 32138275268586241.200, 0.0, -34447226006485144.698, 0.0,
        27054711306197081.241, 0.0, -15129826322457681.181, 0.0, 5705782159023670.8096, 0.0,
        -1301012723549699.4268, 0.0, 135522158703093.69029
    ]),
];

use crate::FloatScalar;

/// Materialize the full coefficient matrix for a given u = 1/sqrt(2x+1):
/// entry [j][k] is u^(j+2k) * f_{j,k}(u^2), zero outside the tabulated
/// triangle. Stack-only; the matrix is transient per-call working storage.
pub(crate) fn fjk_matrix<T: FloatScalar>(u: T) -> [[T; FJK_DIM]; FJK_DIM] {
    let v = u * u;
    let mut fjk = [[T::zero(); FJK_DIM]; FJK_DIM];
    fjk[0][0] = T::one();
    for &(j, k, coeffs) in FJK_POLY.iter() {
        let mut s = T::from(coeffs[coeffs.len() - 1]).unwrap();
        for &c in coeffs.iter().rev().skip(1) {
            s = s * v + T::from(c).unwrap();
        }
        fjk[j][k] = u.powi((j + 2 * k) as i32) * s;
    }
    fjk
}
