//! Language codes.
//!
//! This module holds the set of language codes that
//! sentence and link datafiles can be fetched for.
//!
use std::collections::HashSet;

use structopt::lazy_static::lazy_static;

lazy_static! {

    /// Holds langs that have a per-language export upstream.
    /// Derived from the ISO 639-3 codes used by the Tatoeba exports.
    pub static ref LANG: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert("eng");
        m.insert("abk");
        m.insert("acm");
        m.insert("ady");
        m.insert("afb");
        m.insert("afr");
        m.insert("ain");
        m.insert("akl");
        m.insert("amh");
        m.insert("ang");
        m.insert("apc");
        m.insert("ara");
        m.insert("arg");
        m.insert("arq");
        m.insert("ary");
        m.insert("arz");
        m.insert("asm");
        m.insert("ast");
        m.insert("avk");
        m.insert("awa");
        m.insert("aym");
        m.insert("aze");
        m.insert("bak");
        m.insert("bal");
        m.insert("bam");
        m.insert("ban");
        m.insert("bar");
        m.insert("bcl");
        m.insert("bel");
        m.insert("ben");
        m.insert("ber");
        m.insert("bfz");
        m.insert("bho");
        m.insert("bis");
        m.insert("bod");
        m.insert("bos");
        m.insert("bre");
        m.insert("brx");
        m.insert("bua");
        m.insert("bul");
        m.insert("bvy");
        m.insert("cat");
        m.insert("cay");
        m.insert("cbk");
        m.insert("ceb");
        m.insert("ces");
        m.insert("cha");
        m.insert("chm");
        m.insert("chv");
        m.insert("ckb");
        m.insert("ckt");
        m.insert("cmn");
        m.insert("cor");
        m.insert("cos");
        m.insert("crh");
        m.insert("csb");
        m.insert("cym");
        m.insert("dan");
        m.insert("deu");
        m.insert("diq");
        m.insert("div");
        m.insert("dsb");
        m.insert("dtp");
        m.insert("egl");
        m.insert("ell");
        m.insert("enm");
        m.insert("epo");
        m.insert("est");
        m.insert("eus");
        m.insert("ewe");
        m.insert("ext");
        m.insert("fao");
        m.insert("fij");
        m.insert("fin");
        m.insert("fkv");
        m.insert("fra");
        m.insert("frm");
        m.insert("fro");
        m.insert("frr");
        m.insert("fry");
        m.insert("fur");
        m.insert("gaa");
        m.insert("gag");
        m.insert("gbm");
        m.insert("gcf");
        m.insert("gil");
        m.insert("gla");
        m.insert("gle");
        m.insert("glg");
        m.insert("glv");
        m.insert("gos");
        m.insert("got");
        m.insert("grc");
        m.insert("grn");
        m.insert("gsw");
        m.insert("guj");
        m.insert("hak");
        m.insert("hat");
        m.insert("hau");
        m.insert("haw");
        m.insert("hbo");
        m.insert("heb");
        m.insert("hif");
        m.insert("hil");
        m.insert("hin");
        m.insert("hoc");
        m.insert("hrv");
        m.insert("hrx");
        m.insert("hsb");
        m.insert("hun");
        m.insert("hye");
        m.insert("iba");
        m.insert("ibo");
        m.insert("ido");
        m.insert("iii");
        m.insert("ike");
        m.insert("ile");
        m.insert("ilo");
        m.insert("ina");
        m.insert("isl");
        m.insert("ita");
        m.insert("izh");
        m.insert("jam");
        m.insert("jav");
        m.insert("jbo");
        m.insert("jdt");
        m.insert("jpn");
        m.insert("kaa");
        m.insert("kab");
        m.insert("kal");
        m.insert("kan");
        m.insert("kas");
        m.insert("kat");
        m.insert("kaz");
        m.insert("kek");
        m.insert("kha");
        m.insert("khm");
        m.insert("kin");
        m.insert("kir");
        m.insert("kjh");
        m.insert("kmr");
        m.insert("koi");
        m.insert("kor");
        m.insert("kpv");
        m.insert("krc");
        m.insert("krl");
        m.insert("ksh");
        m.insert("kum");
        m.insert("kzj");
        m.insert("lad");
        m.insert("lao");
        m.insert("lat");
        m.insert("ldn");
        m.insert("lfn");
        m.insert("lij");
        m.insert("lim");
        m.insert("lin");
        m.insert("lit");
        m.insert("liv");
        m.insert("lkt");
        m.insert("lld");
        m.insert("lmo");
        m.insert("ltg");
        m.insert("ltz");
        m.insert("lug");
        m.insert("lvs");
        m.insert("lzh");
        m.insert("lzz");
        m.insert("mad");
        m.insert("mah");
        m.insert("mai");
        m.insert("mal");
        m.insert("mar");
        m.insert("max");
        m.insert("mdf");
        m.insert("mfe");
        m.insert("mgm");
        m.insert("mhr");
        m.insert("mic");
        m.insert("min");
        m.insert("mkd");
        m.insert("mlg");
        m.insert("mlt");
        m.insert("mnc");
        m.insert("mni");
        m.insert("mnw");
        m.insert("moh");
        m.insert("mon");
        m.insert("mri");
        m.insert("mrj");
        m.insert("mus");
        m.insert("mvv");
        m.insert("mwl");
        m.insert("mya");
        m.insert("myv");
        m.insert("nah");
        m.insert("nan");
        m.insert("nau");
        m.insert("nav");
        m.insert("nds");
        m.insert("new");
        m.insert("ngt");
        m.insert("niu");
        m.insert("nld");
        m.insert("nno");
        m.insert("nob");
        m.insert("nog");
        m.insert("non");
        m.insert("nov");
        m.insert("npi");
        m.insert("nst");
        m.insert("nus");
        m.insert("nya");
        m.insert("oci");
        m.insert("ojp");
        m.insert("ood");
        m.insert("ori");
        m.insert("orv");
        m.insert("oss");
        m.insert("ota");
        m.insert("otk");
        m.insert("pag");
        m.insert("pal");
        m.insert("pam");
        m.insert("pan");
        m.insert("pap");
        m.insert("pau");
        m.insert("pcd");
        m.insert("pdc");
        m.insert("pes");
        m.insert("phn");
        m.insert("pli");
        m.insert("pms");
        m.insert("pnb");
        m.insert("pol");
        m.insert("por");
        m.insert("ppl");
        m.insert("prg");
        m.insert("pus");
        m.insert("quc");
        m.insert("que");
        m.insert("qya");
        m.insert("rap");
        m.insert("rif");
        m.insert("roh");
        m.insert("rom");
        m.insert("ron");
        m.insert("rue");
        m.insert("run");
        m.insert("rus");
        m.insert("ryu");
        m.insert("sah");
        m.insert("san");
        m.insert("sat");
        m.insert("scn");
        m.insert("sco");
        m.insert("sdh");
        m.insert("sgs");
        m.insert("shi");
        m.insert("shs");
        m.insert("shy");
        m.insert("sin");
        m.insert("sjn");
        m.insert("slk");
        m.insert("slv");
        m.insert("sma");
        m.insert("sme");
        m.insert("smo");
        m.insert("sna");
        m.insert("snd");
        m.insert("som");
        m.insert("sot");
        m.insert("spa");
        m.insert("sqi");
        m.insert("srd");
        m.insert("srn");
        m.insert("srp");
        m.insert("ssw");
        m.insert("stq");
        m.insert("sun");
        m.insert("sux");
        m.insert("swc");
        m.insert("swe");
        m.insert("swg");
        m.insert("swh");
        m.insert("syc");
        m.insert("szl");
        m.insert("tah");
        m.insert("tam");
        m.insert("tat");
        m.insert("tel");
        m.insert("tet");
        m.insert("tgk");
        m.insert("tgl");
        m.insert("tha");
        m.insert("thv");
        m.insert("tig");
        m.insert("tir");
        m.insert("tkl");
        m.insert("tlh");
        m.insert("tly");
        m.insert("toi");
        m.insert("tok");
        m.insert("ton");
        m.insert("tpi");
        m.insert("tpw");
        m.insert("tsn");
        m.insert("tso");
        m.insert("tts");
        m.insert("tuk");
        m.insert("tur");
        m.insert("tvl");
        m.insert("tyv");
        m.insert("tzl");
        m.insert("udm");
        m.insert("uig");
        m.insert("ukr");
        m.insert("umb");
        m.insert("urd");
        m.insert("urh");
        m.insert("uzb");
        m.insert("vec");
        m.insert("vep");
        m.insert("vie");
        m.insert("vol");
        m.insert("vro");
        m.insert("war");
        m.insert("wln");
        m.insert("wol");
        m.insert("wuu");
        m.insert("xal");
        m.insert("xho");
        m.insert("xmf");
        m.insert("yid");
        m.insert("yor");
        m.insert("yua");
        m.insert("yue");
        m.insert("zea");
        m.insert("zgh");
        m.insert("zlm");
        m.insert("zsm");
        m.insert("zul");
        m.insert("zza");
        m
    };
}
